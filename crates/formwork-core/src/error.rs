//! Core error types for the formwork toolkit.
//!
//! [`FormError`] covers the failure modes of the submission cycle: transport
//! problems, unexpected HTTP statuses, and server responses that do not match
//! the expected shape. Validation failures are deliberately *not* errors —
//! they are data, captured in the form's error mapping and surfaced through
//! rendering.

use thiserror::Error;

/// The primary error type for the formwork toolkit.
///
/// Every variant describes a way a submit attempt can fail outside of field
/// validation. The submission orchestrator converts all of these into a
/// failure outcome rather than letting them escape to the caller; the enum
/// exists so intermediate layers can report *which* way an attempt broke.
#[derive(Error, Debug)]
pub enum FormError {
    /// The endpoint could not be reached or the connection failed mid-flight.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a status the protocol does not assign a
    /// meaning to (anything other than 2xx or 400).
    #[error("unexpected status: {0}")]
    UnexpectedStatus(u16),

    /// The server sent a 400 response whose body could not be decoded into
    /// the expected failure payload.
    #[error("malformed server response: {0}")]
    MalformedResponse(String),

    /// The request body could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The HTTP client could not be constructed from its configuration.
    #[error("client configuration error: {0}")]
    Configuration(String),
}

impl FormError {
    /// Returns `true` if this error came from the network layer rather than
    /// from interpreting a response the server actually produced.
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// A convenience type alias for `Result<T, FormError>`.
pub type FormResult<T> = Result<T, FormError>;
