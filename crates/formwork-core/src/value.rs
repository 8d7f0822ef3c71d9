//! Field value types for representing form input in an editor-agnostic way.
//!
//! The [`FieldValue`] enum is the type stored in a form's value mapping. Text
//! editors produce strings, but callers may also seed numeric or boolean
//! values, so the enum covers the JSON primitive set. Serialization is
//! untagged: a value mapping serializes to a plain JSON object, which is
//! exactly the submission request body.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The current value of one form field, keyed by field id in a [`ValueMap`].
///
/// # Examples
///
/// ```
/// use formwork_core::value::FieldValue;
///
/// let v = FieldValue::from("hello");
/// assert_eq!(v.as_text(), Some("hello"));
///
/// let v = FieldValue::from(42_i64);
/// assert_eq!(v, FieldValue::Int(42));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// No value. Serializes as JSON `null`.
    Null,
    /// A boolean value.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// A UTF-8 string.
    Text(String),
}

/// The mutable mapping from field id to current input value.
pub type ValueMap = HashMap<String, FieldValue>;

impl FieldValue {
    /// Returns the string contents when this value is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Renders the value the way an editor displays it. `Null` renders as
    /// the empty string.
    pub fn render_text(&self) -> String {
        match self {
            Self::Null => String::new(),
            other => other.to_string(),
        }
    }

    /// Returns `true` when there is nothing to validate or submit: `Null`,
    /// or text with no characters.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

// ── From implementations ───────────────────────────────────────────────

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}
