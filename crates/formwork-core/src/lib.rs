//! # formwork-core
//!
//! Foundation types for the formwork toolkit. This crate has no dependency on
//! the form layer or the HTTP client and provides the types every other crate
//! builds on.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result alias
//! - [`value`] - The [`FieldValue`] primitive and the [`ValueMap`] it lives in
//! - [`logging`] - Tracing-based logging setup

pub mod error;
pub mod logging;
pub mod value;

// Re-export the most commonly used types at the crate root.
pub use error::{FormError, FormResult};
pub use value::{FieldValue, ValueMap};
