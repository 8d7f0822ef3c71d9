//! # formwork
//!
//! A client-side form toolkit for Rust.
//!
//! This is the meta-crate that re-exports the toolkit's sub-crates for
//! convenient access. Depend on `formwork` to get everything, or on the
//! individual crates for finer-grained control.
//!
//! A form is built from field descriptors, shared with field components
//! through a [`FormHandle`](forms::FormHandle), and submitted with a
//! [`FormClient`](client::FormClient):
//!
//! ```no_run
//! use formwork::forms::{FieldDescriptor, Form, FormHandle, rules};
//! use formwork::client::FormClient;
//!
//! # async fn run() {
//! let form = Form::new(vec![
//!     FieldDescriptor::new("email")
//!         .label("Email")
//!         .validation(rules::is_email),
//! ]);
//! let handle = FormHandle::new(form);
//! handle.set_value("email", "alice@example.com");
//!
//! let status = FormClient::new().submit(&handle, "/api/signup").await;
//! println!("{:?}", status.submit_success());
//! # }
//! ```

/// Foundation types: field values, error types, logging setup.
pub use formwork_core as core;

/// Field descriptors, validation rules, editors, and the form state machine.
#[cfg(feature = "forms")]
pub use formwork_forms as forms;

/// The submission orchestrator: JSON POST and server-error decoding.
#[cfg(feature = "client")]
pub use formwork_client as client;
