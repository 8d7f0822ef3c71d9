//! Field descriptors: the static, caller-supplied configuration for one
//! form input.
//!
//! A [`FieldDescriptor`] captures everything needed to render and validate a
//! single field: its id, label, editor kind, dropdown options, initial value,
//! and an optional validation rule. Descriptors are immutable for the
//! lifetime of a form instance.

use formwork_core::value::FieldValue;

use crate::rules::{RuleArgs, RuleFn, Validation};

/// The kind of editor a field renders as.
///
/// This is a closed enumeration resolved once at descriptor construction.
/// Callers with configuration in string form go through [`EditorKind::parse`],
/// which is case-insensitive and falls back to [`EditorKind::Textbox`] for
/// anything unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorKind {
    /// A single-line text input.
    #[default]
    Textbox,
    /// A multi-line text input.
    MultilineTextbox,
    /// A single-choice dropdown.
    Dropdown,
}

impl EditorKind {
    /// Parses an editor-kind name, ignoring case. Unknown names resolve to
    /// `Textbox`.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "multilinetextbox" => Self::MultilineTextbox,
            "dropdown" => Self::Dropdown,
            _ => Self::Textbox,
        }
    }
}

impl std::fmt::Display for EditorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Textbox => "textbox",
            Self::MultilineTextbox => "multilinetextbox",
            Self::Dropdown => "dropdown",
        };
        write!(f, "{name}")
    }
}

/// Complete definition of a form field.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// The field id: the key in the value and error mappings, and the HTML
    /// name/id attribute.
    pub id: String,
    /// Human-readable label rendered next to the editor.
    pub label: String,
    /// Which editor this field renders as.
    pub editor: EditorKind,
    /// Choice list for [`EditorKind::Dropdown`]; ignored by other editors.
    pub options: Vec<String>,
    /// The value displayed before the user first edits the field. Not part
    /// of the value mapping until the user (or caller) sets it.
    pub initial: FieldValue,
    /// The validation rule applied by `validate_field`, if any.
    pub validation: Option<Validation>,
}

impl FieldDescriptor {
    /// Creates a descriptor with sensible defaults: textbox editor, no
    /// options, no initial value, no validation. The label defaults to the
    /// id with underscores replaced by spaces.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let label = id.replace('_', " ");
        Self {
            id,
            label,
            editor: EditorKind::default(),
            options: Vec::new(),
            initial: FieldValue::Null,
            validation: None,
        }
    }

    /// Sets the label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the editor kind.
    pub const fn editor(mut self, editor: EditorKind) -> Self {
        self.editor = editor;
        self
    }

    /// Sets the dropdown options.
    pub fn options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    /// Sets the initial value.
    pub fn initial(mut self, value: impl Into<FieldValue>) -> Self {
        self.initial = value.into();
        self
    }

    /// Attaches a validation rule that takes no arguments.
    pub fn validation(mut self, rule: RuleFn) -> Self {
        self.validation = Some(Validation::new(rule));
        self
    }

    /// Attaches a validation rule with arguments.
    pub fn validation_with(mut self, rule: RuleFn, args: RuleArgs) -> Self {
        self.validation = Some(Validation::with_args(rule, args));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules;

    #[test]
    fn test_editor_kind_parse_case_insensitive() {
        assert_eq!(EditorKind::parse("textbox"), EditorKind::Textbox);
        assert_eq!(EditorKind::parse("TextBox"), EditorKind::Textbox);
        assert_eq!(
            EditorKind::parse("MultilineTextbox"),
            EditorKind::MultilineTextbox
        );
        assert_eq!(
            EditorKind::parse("MULTILINETEXTBOX"),
            EditorKind::MultilineTextbox
        );
        assert_eq!(EditorKind::parse("dropdown"), EditorKind::Dropdown);
        assert_eq!(EditorKind::parse("DropDown"), EditorKind::Dropdown);
    }

    #[test]
    fn test_editor_kind_parse_unknown_defaults_to_textbox() {
        assert_eq!(EditorKind::parse(""), EditorKind::Textbox);
        assert_eq!(EditorKind::parse("checkbox"), EditorKind::Textbox);
    }

    #[test]
    fn test_editor_kind_default() {
        assert_eq!(EditorKind::default(), EditorKind::Textbox);
    }

    #[test]
    fn test_editor_kind_display() {
        assert_eq!(EditorKind::Textbox.to_string(), "textbox");
        assert_eq!(EditorKind::MultilineTextbox.to_string(), "multilinetextbox");
        assert_eq!(EditorKind::Dropdown.to_string(), "dropdown");
    }

    #[test]
    fn test_descriptor_defaults() {
        let field = FieldDescriptor::new("first_name");
        assert_eq!(field.id, "first_name");
        assert_eq!(field.label, "first name");
        assert_eq!(field.editor, EditorKind::Textbox);
        assert!(field.options.is_empty());
        assert_eq!(field.initial, FieldValue::Null);
        assert!(field.validation.is_none());
    }

    #[test]
    fn test_descriptor_builder_chain() {
        let field = FieldDescriptor::new("country")
            .label("Country")
            .editor(EditorKind::Dropdown)
            .options(vec!["PL".to_string(), "DE".to_string()])
            .initial("PL")
            .validation(rules::required);
        assert_eq!(field.label, "Country");
        assert_eq!(field.editor, EditorKind::Dropdown);
        assert_eq!(field.options.len(), 2);
        assert_eq!(field.initial, FieldValue::Text("PL".to_string()));
        assert!(field.validation.is_some());
    }

    #[test]
    fn test_descriptor_validation_with_args() {
        let field = FieldDescriptor::new("email")
            .validation_with(rules::max_length, RuleArgs::Length(64));
        let validation = field.validation.unwrap();
        assert_eq!(validation.args, RuleArgs::Length(64));
    }
}
