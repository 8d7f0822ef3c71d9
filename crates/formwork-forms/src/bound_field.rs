//! Bound fields: a descriptor paired with its current value and error,
//! ready to render.
//!
//! A [`BoundField`] is created during rendering to combine a field's static
//! configuration with the form's current state: the displayed value (the
//! current input, falling back to the descriptor's initial value), the error
//! message, and the editor the field dispatches to.

use formwork_core::value::FieldValue;

use crate::editors::create_editor_with_options;
use crate::fields::{EditorKind, FieldDescriptor};

/// The inline style flagging an editor in error state.
const ERROR_STYLE: &str = "border-color: red";

/// A form field bound to its current value and validation state.
#[derive(Debug, Clone)]
pub struct BoundField {
    /// The field id.
    pub id: String,
    /// Human-readable label; empty renders no `<label>` element.
    pub label: String,
    /// The editor this field dispatches to.
    pub editor: EditorKind,
    /// Dropdown options, where applicable.
    pub options: Vec<String>,
    /// The displayed value: current input, or the descriptor's initial value
    /// when the field has not been edited.
    pub value: String,
    /// The field's error message; empty means valid.
    pub error: String,
}

impl BoundField {
    /// Pairs a descriptor with the form's current state for this field.
    pub fn new(descriptor: &FieldDescriptor, value: Option<&FieldValue>, error: &str) -> Self {
        let value = value
            .map_or_else(|| descriptor.initial.render_text(), FieldValue::render_text);
        Self {
            id: descriptor.id.clone(),
            label: descriptor.label.clone(),
            editor: descriptor.editor,
            options: descriptor.options.clone(),
            value,
            error: error.to_string(),
        }
    }

    /// Returns `true` if this field has a non-empty error.
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// The style override passed to the editor: the error border when the
    /// field is invalid, nothing otherwise.
    pub fn editor_style(&self) -> Option<&'static str> {
        if self.has_error() {
            Some(ERROR_STYLE)
        } else {
            None
        }
    }

    /// Renders a `<label>` element for this field.
    pub fn label_tag(&self) -> String {
        format!(r#"<label for="{}">{}</label>"#, self.id, self.label)
    }

    /// Renders the editor element alone, error-styled when invalid.
    pub fn editor_html(&self) -> String {
        let editor = create_editor_with_options(self.editor, &self.options);
        editor.render(&self.id, &self.value, self.editor_style())
    }

    /// Renders the full field row: label, editor, and the inline error
    /// message block when the field is invalid.
    pub fn render(&self) -> String {
        let label = if self.label.is_empty() {
            String::new()
        } else {
            self.label_tag()
        };
        let error = if self.has_error() {
            format!(
                r#"<div style="color: red; font-size: 80%"><p>{}</p></div>"#,
                self.error
            )
        } else {
            String::new()
        };
        format!(
            r#"<div class="form-group">{label}{editor}{error}</div>"#,
            label = label,
            editor = self.editor_html(),
            error = error,
        )
    }
}
