//! The response aggregate: a top-level message plus per-field error
//! messages, consumed by rendering.

use std::collections::HashMap;

/// Per-field error messages, keyed by field id. The empty string means the
/// field is valid; its key set is always a subset of the form's descriptor
/// id set.
pub type ErrorMap = HashMap<String, String>;

/// Aggregate of a top-level message and all field-level error messages.
///
/// `message` carries a success/failure message, either client-generated or
/// echoed from the server; `errors` carries the field-level detail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    /// Top-level message.
    pub message: String,
    /// Field-level error messages.
    pub errors: ErrorMap,
}

impl Response {
    /// Creates an empty response: no message, no errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the error message for a field; absent entries read as valid.
    pub fn error(&self, field: &str) -> &str {
        self.errors.get(field).map_or("", String::as_str)
    }

    /// Returns `true` when a field's error message is empty or absent.
    pub fn is_field_valid(&self, field: &str) -> bool {
        self.error(field).is_empty()
    }

    /// Returns `true` when any field carries a non-empty error message.
    pub fn has_errors(&self) -> bool {
        self.errors.values().any(|msg| !msg.is_empty())
    }
}
