//! # formwork-forms
//!
//! The form layer of the formwork toolkit: field descriptors, validation
//! rules, editor renderers, and the form state machine that ties them
//! together.
//!
//! ## Modules
//!
//! - [`fields`] - Field descriptors and editor kinds
//! - [`rules`] - Pure validation rules over the whole value mapping
//! - [`response`] - The message + error-map aggregate consumed by rendering
//! - [`form`] - The value/error state machine and `<form>` rendering
//! - [`handle`] - The shared read/write capability for field components
//! - [`editors`] - HTML renderers for each editor kind
//! - [`bound_field`] - Descriptor + state pairing for field-row rendering

pub mod bound_field;
pub mod editors;
pub mod fields;
pub mod form;
pub mod handle;
pub mod response;
pub mod rules;

// Re-export the most commonly used types at the crate root.
pub use bound_field::BoundField;
pub use fields::{EditorKind, FieldDescriptor};
pub use form::{Banner, Form, FormConfig, SubmitStatus};
pub use handle::FormHandle;
pub use response::{ErrorMap, Response};
pub use rules::{RuleArgs, RuleFn, Validation};
