//! # formwork-client
//!
//! The HTTP side of the formwork toolkit: the submission orchestrator that
//! validates a form locally, POSTs its value mapping as JSON, and merges the
//! server's verdict back into form state.
//!
//! ## Modules
//!
//! - [`submit`] - [`FormClient`] and the submit cycle
//! - [`wire`] - The typed shape of the server's validation-failure payload

pub mod submit;
pub mod wire;

// Re-export the most commonly used types at the crate root.
pub use submit::{FormClient, FormClientBuilder};
pub use wire::{ServerFailure, ServerFieldError};
