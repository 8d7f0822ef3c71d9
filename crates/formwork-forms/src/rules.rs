//! Validation rules: pure functions from the whole value mapping to a
//! per-field error message.
//!
//! A rule receives the complete current [`ValueMap`], the id of the field
//! under validation, and its [`RuleArgs`]. It returns an error message where
//! the empty string means valid. Rules never fail and never touch state,
//! which makes repeated validation of unchanged values idempotent by
//! construction.
//!
//! Rules see the *whole* mapping rather than a single value so that
//! cross-field rules like [`matches_field`] are expressible without a
//! separate mechanism.

use once_cell::sync::Lazy;
use regex::Regex;

use formwork_core::value::{FieldValue, ValueMap};

/// The signature every validation rule satisfies.
pub type RuleFn = fn(&ValueMap, &str, &RuleArgs) -> String;

/// Arguments supplied to a rule alongside the field id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleArgs {
    /// The rule takes no arguments.
    None,
    /// A character count, for length rules.
    Length(usize),
    /// Another field's id, for cross-field rules.
    Field(String),
}

impl RuleArgs {
    fn length(&self) -> Option<usize> {
        match self {
            Self::Length(n) => Some(*n),
            _ => None,
        }
    }

    fn field(&self) -> Option<&str> {
        match self {
            Self::Field(id) => Some(id),
            _ => None,
        }
    }
}

/// A rule paired with its arguments, as attached to a field descriptor.
#[derive(Debug, Clone)]
pub struct Validation {
    /// The rule function.
    pub rule: RuleFn,
    /// The arguments passed on every invocation.
    pub args: RuleArgs,
}

impl Validation {
    /// Creates a validation with no arguments.
    pub const fn new(rule: RuleFn) -> Self {
        Self {
            rule,
            args: RuleArgs::None,
        }
    }

    /// Creates a validation with arguments.
    pub const fn with_args(rule: RuleFn, args: RuleArgs) -> Self {
        Self { rule, args }
    }

    /// Runs the rule against the current values.
    pub fn check(&self, values: &ValueMap, field: &str) -> String {
        (self.rule)(values, field, &self.args)
    }
}

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$").expect("valid regex")
});

fn text_of<'a>(values: &'a ValueMap, field: &str) -> &'a str {
    values
        .get(field)
        .and_then(|v| v.as_text())
        .unwrap_or_default()
}

/// Reports a mis-typed [`RuleArgs`] and treats the field as valid. A rule
/// wired up with the wrong argument kind is a caller bug, not user input.
fn wrong_args(rule: &str, field: &str) -> String {
    tracing::warn!(rule, field, "validation rule invoked with wrong argument kind");
    String::new()
}

/// The field must have a non-empty value.
pub fn required(values: &ValueMap, field: &str, _args: &RuleArgs) -> String {
    let missing = values.get(field).map_or(true, FieldValue::is_empty);
    if missing {
        format!("{field} is required")
    } else {
        String::new()
    }
}

/// The field, when non-empty, must have at least `Length(n)` characters.
pub fn min_length(values: &ValueMap, field: &str, args: &RuleArgs) -> String {
    let Some(min) = args.length() else {
        return wrong_args("min_length", field);
    };
    let text = text_of(values, field);
    if !text.is_empty() && text.chars().count() < min {
        format!("{field} must be at least {min} characters")
    } else {
        String::new()
    }
}

/// The field, when non-empty, must have at most `Length(n)` characters.
pub fn max_length(values: &ValueMap, field: &str, args: &RuleArgs) -> String {
    let Some(max) = args.length() else {
        return wrong_args("max_length", field);
    };
    let text = text_of(values, field);
    if text.chars().count() > max {
        format!("{field} must be at most {max} characters")
    } else {
        String::new()
    }
}

/// The field, when non-empty, must look like an email address.
pub fn is_email(values: &ValueMap, field: &str, _args: &RuleArgs) -> String {
    let text = text_of(values, field);
    if !text.is_empty() && !EMAIL_RE.is_match(text) {
        format!("{field} must be a valid email address")
    } else {
        String::new()
    }
}

/// The field must equal the field named by `Field(other)`. This is the
/// classic password-confirmation rule, and the reason rules receive the
/// whole value mapping.
pub fn matches_field(values: &ValueMap, field: &str, args: &RuleArgs) -> String {
    let Some(other) = args.field() else {
        return wrong_args("matches_field", field);
    };
    let own = values.get(field);
    let theirs = values.get(other);
    if own == theirs {
        String::new()
    } else {
        format!("{field} must match {other}")
    }
}
