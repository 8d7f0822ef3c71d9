//! The wire shape of a server-side validation failure.
//!
//! An HTTP 400 response carries a JSON body with a top-level message and a
//! list of per-field errors. Decoding is strict: a body that does not match
//! this shape is a [`FormError::MalformedResponse`], never a silent success.
//! Extra keys (the backend also sends a `success` flag) are tolerated.

use serde::Deserialize;

use formwork_core::error::{FormError, FormResult};

/// One field-level error as the server reports it. Field names are matched
/// case-insensitively downstream; the raw casing is preserved here.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerFieldError {
    /// The field the error applies to.
    pub field: String,
    /// The error message.
    pub message: String,
}

/// The decoded body of an HTTP 400 validation failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerFailure {
    /// Top-level failure message.
    pub message: String,
    /// Per-field errors.
    pub errors: Vec<ServerFieldError>,
}

impl ServerFailure {
    /// Flattens the error list into `(field, message)` pairs for
    /// [`Form::apply_server_errors`](formwork_forms::form::Form::apply_server_errors).
    pub fn into_fields(self) -> Vec<(String, String)> {
        self.errors
            .into_iter()
            .map(|e| (e.field, e.message))
            .collect()
    }
}

/// Decodes a 400 response body.
pub fn decode_failure(body: &str) -> FormResult<ServerFailure> {
    serde_json::from_str(body).map_err(|err| FormError::MalformedResponse(err.to_string()))
}
