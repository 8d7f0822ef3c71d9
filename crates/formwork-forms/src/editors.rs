//! Editor renderers: the HTML form elements fields render as.
//!
//! Each editor knows how to render itself for a field id, a current value,
//! and an optional inline style override (used to flag the error state).
//! Editors carry no state of their own; write-back happens through the
//! shared [`FormHandle`](crate::handle::FormHandle), with hosts feeding
//! value updates on change and per-field validation on blur/commit.

use crate::fields::EditorKind;

/// A renderer for one editor kind.
pub trait Editor: Send + Sync {
    /// Returns the editor kind this renderer implements.
    fn kind(&self) -> EditorKind;

    /// Renders the editor as an HTML string.
    ///
    /// # Arguments
    /// - `id` - The field id, used as the `id` and `name` attributes
    /// - `value` - The current value to display
    /// - `style` - Inline style override (e.g. the error border)
    fn render(&self, id: &str, value: &str, style: Option<&str>) -> String;
}

fn style_attr(style: Option<&str>) -> String {
    style.map_or_else(String::new, |s| format!(r#" style="{s}""#))
}

/// A single-line `<input type="text">` editor.
#[derive(Debug, Clone)]
pub struct Textbox;

impl Editor for Textbox {
    fn kind(&self) -> EditorKind {
        EditorKind::Textbox
    }

    fn render(&self, id: &str, value: &str, style: Option<&str>) -> String {
        format!(
            r#"<input type="text" id="{id}" name="{id}" value="{value}"{} />"#,
            style_attr(style)
        )
    }
}

/// A multi-line `<textarea>` editor.
#[derive(Debug, Clone)]
pub struct MultiTextbox;

impl Editor for MultiTextbox {
    fn kind(&self) -> EditorKind {
        EditorKind::MultilineTextbox
    }

    fn render(&self, id: &str, value: &str, style: Option<&str>) -> String {
        format!(
            r#"<textarea id="{id}" name="{id}"{}>{value}</textarea>"#,
            style_attr(style)
        )
    }
}

/// A single-choice `<select>` editor.
#[derive(Debug, Clone)]
pub struct Dropdown {
    /// The available options. Each option's value doubles as its label.
    pub options: Vec<String>,
}

impl Dropdown {
    /// Creates a dropdown with the given options.
    pub const fn new(options: Vec<String>) -> Self {
        Self { options }
    }
}

impl Editor for Dropdown {
    fn kind(&self) -> EditorKind {
        EditorKind::Dropdown
    }

    fn render(&self, id: &str, value: &str, style: Option<&str>) -> String {
        let mut options = String::new();
        for option in &self.options {
            let selected = if option == value { " selected" } else { "" };
            options.push_str(&format!(
                r#"<option value="{option}"{selected}>{option}</option>"#
            ));
        }
        format!(
            r#"<select id="{id}" name="{id}"{}>{options}</select>"#,
            style_attr(style)
        )
    }
}

/// Creates a boxed editor for an [`EditorKind`].
///
/// For [`EditorKind::Dropdown`] the option list is empty; use
/// [`create_editor_with_options`] when the descriptor carries options.
pub fn create_editor(kind: EditorKind) -> Box<dyn Editor> {
    match kind {
        EditorKind::Textbox => Box::new(Textbox),
        EditorKind::MultilineTextbox => Box::new(MultiTextbox),
        EditorKind::Dropdown => Box::new(Dropdown::new(vec![])),
    }
}

/// Creates a boxed editor, populating dropdown options where applicable.
pub fn create_editor_with_options(kind: EditorKind, options: &[String]) -> Box<dyn Editor> {
    match kind {
        EditorKind::Dropdown => Box::new(Dropdown::new(options.to_vec())),
        other => create_editor(other),
    }
}

/// A plain button renderer. Presentation only; the form wrapper renders its
/// own submit button, this exists for owner-supplied extra buttons.
#[derive(Debug, Clone)]
pub struct Button {
    /// The HTML id.
    pub id: String,
    /// The visible label.
    pub label: String,
    /// The `type` attribute. Defaults to "button".
    pub button_type: String,
    /// The `class` attribute.
    pub class_name: String,
    /// Optional icon class rendered in an `<i>` before the label.
    pub icon_class: Option<String>,
    /// Whether the button renders disabled.
    pub disabled: bool,
}

impl Button {
    /// Creates a button with the defaults the toolkit's styling expects.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            button_type: "button".to_string(),
            class_name: "btn btn-primary btn-block".to_string(),
            icon_class: None,
            disabled: false,
        }
    }

    /// Sets the `type` attribute.
    pub fn button_type(mut self, button_type: impl Into<String>) -> Self {
        self.button_type = button_type.into();
        self
    }

    /// Sets the `class` attribute.
    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = class.into();
        self
    }

    /// Sets an icon class.
    pub fn icon_class(mut self, icon: impl Into<String>) -> Self {
        self.icon_class = Some(icon.into());
        self
    }

    /// Sets the disabled state.
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Renders the button as an HTML string.
    pub fn render(&self) -> String {
        let disabled = if self.disabled { " disabled" } else { "" };
        let icon = self
            .icon_class
            .as_deref()
            .map_or_else(String::new, |cls| format!(r#"<i class="{cls}"></i>"#));
        format!(
            r#"<button id="{id}" type="{ty}" class="{class}"{disabled}><span>{icon}{label}</span></button>"#,
            id = self.id,
            ty = self.button_type,
            class = self.class_name,
            disabled = disabled,
            icon = icon,
            label = self.label,
        )
    }
}
