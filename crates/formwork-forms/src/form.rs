//! The form state machine: value store, error aggregation, submission
//! outcome, and the `<form>` wrapper rendering.
//!
//! [`Form`] owns the mutable state of one form instance: the value mapping,
//! the [`Response`] aggregate, and the submission status. All mutation goes
//! through its methods; presentation components read state and request
//! updates through [`FormHandle`](crate::handle::FormHandle) rather than
//! touching the maps directly.

use formwork_core::value::{FieldValue, ValueMap};

use crate::bound_field::BoundField;
use crate::fields::FieldDescriptor;
use crate::response::{ErrorMap, Response};

/// The outcome of the most recent submit attempt.
///
/// The original toolkit tracked this as an optional boolean; the explicit
/// `InFlight` state additionally closes the window in which a second submit
/// could race the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    /// No submit attempt has completed or started.
    #[default]
    NotSubmitted,
    /// A submit attempt is awaiting its response.
    InFlight,
    /// The last attempt was accepted by the server.
    Succeeded,
    /// The last attempt failed: validation, transport, or server rejection.
    Failed,
}

impl SubmitStatus {
    /// The tri-state view: `None` until an attempt completes, then whether
    /// it succeeded.
    pub const fn submit_success(self) -> Option<bool> {
        match self {
            Self::NotSubmitted | Self::InFlight => None,
            Self::Succeeded => Some(true),
            Self::Failed => Some(false),
        }
    }
}

/// Which banner the form renders under its fields. Exactly one applies in
/// any reachable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    /// Nothing to report yet.
    None,
    /// The last submit attempt was accepted.
    Success,
    /// The last attempt failed without field detail (transport error,
    /// unexpected status, malformed response).
    GenericFailure,
    /// Field errors are present, locally or from the server.
    ValidationFailure,
}

/// Owner-facing configuration: the action path plus presentation knobs.
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// The HTTP path the form posts to.
    pub action: String,
    /// Extra class appended to the container element.
    pub class_name: Option<String>,
    /// Label on the submit button.
    pub submit_label: String,
}

impl FormConfig {
    /// Creates a config for the given action path with default presentation.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            class_name: None,
            submit_label: "Submit".to_string(),
        }
    }

    /// Appends a class to the container element.
    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    /// Sets the submit button label.
    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }
}

/// A form instance: descriptors plus all mutable state.
#[derive(Debug)]
pub struct Form {
    descriptors: Vec<FieldDescriptor>,
    values: ValueMap,
    response: Response,
    status: SubmitStatus,
    revision: u64,
}

impl Form {
    /// Creates a form over the given descriptors. The value mapping and the
    /// response start empty; descriptors' initial values are shown by the
    /// editors but enter the value mapping only when set.
    pub fn new(descriptors: Vec<FieldDescriptor>) -> Self {
        Self {
            descriptors,
            values: ValueMap::new(),
            response: Response::new(),
            status: SubmitStatus::default(),
            revision: 0,
        }
    }

    /// Returns the field descriptors, in render order.
    pub fn descriptors(&self) -> &[FieldDescriptor] {
        &self.descriptors
    }

    /// Looks up a descriptor by field id.
    pub fn descriptor(&self, id: &str) -> Option<&FieldDescriptor> {
        self.descriptors.iter().find(|d| d.id == id)
    }

    /// Returns the current value mapping.
    pub fn values(&self) -> &ValueMap {
        &self.values
    }

    /// Returns the current value of one field.
    pub fn value(&self, id: &str) -> Option<&FieldValue> {
        self.values.get(id)
    }

    /// Returns the response aggregate.
    pub fn response(&self) -> &Response {
        &self.response
    }

    /// Returns the submission status.
    pub const fn status(&self) -> SubmitStatus {
        self.status
    }

    /// A counter bumped on every state change, including validations whose
    /// error text comes out unchanged. Dependents compare revisions instead
    /// of diffing state.
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision += 1;
    }

    /// Merges the given key/value pairs into the value mapping,
    /// last-write-wins per key. The only mutation path for user input; does
    /// not trigger validation.
    pub fn set_values(&mut self, partial: ValueMap) {
        for (id, value) in partial {
            self.values.insert(id, value);
        }
        self.bump();
    }

    /// Sets a single field's value. Sugar over [`Form::set_values`].
    pub fn set_value(&mut self, id: impl Into<String>, value: impl Into<FieldValue>) {
        let mut partial = ValueMap::new();
        partial.insert(id.into(), value.into());
        self.set_values(partial);
    }

    /// Validates one field and merges the result into the error mapping
    /// under that field's key, leaving other entries untouched. A field with
    /// no registered rule validates clean; an id outside the descriptor set
    /// is a no-op that reports clean, so the error mapping's key set stays
    /// within the descriptor set.
    ///
    /// Returns the computed error message so callers can branch immediately.
    pub fn validate_field(&mut self, id: &str) -> String {
        let Some(descriptor) = self.descriptor(id) else {
            return String::new();
        };
        let message = descriptor
            .validation
            .as_ref()
            .map(|v| v.check(&self.values, id))
            .unwrap_or_default();
        self.response.errors.insert(id.to_string(), message.clone());
        self.bump();
        message
    }

    /// Validates every field, replacing the error mapping wholesale so no
    /// stale entries linger. Afterwards the error mapping's key set is
    /// exactly the descriptor id set.
    ///
    /// Returns `true` when any field has a non-empty error.
    pub fn validate_all(&mut self) -> bool {
        self.response.errors = ErrorMap::new();
        let ids: Vec<String> = self.descriptors.iter().map(|d| d.id.clone()).collect();
        for id in &ids {
            self.validate_field(id);
        }
        self.response.has_errors()
    }

    /// Marks a submit attempt as in flight.
    pub fn mark_in_flight(&mut self) {
        self.status = SubmitStatus::InFlight;
        self.bump();
    }

    /// Records the outcome of a submit attempt.
    pub fn record_outcome(&mut self, success: bool) {
        self.status = if success {
            SubmitStatus::Succeeded
        } else {
            SubmitStatus::Failed
        };
        self.bump();
    }

    /// Rebuilds the response from a server-side validation failure. Field
    /// names are lower-cased on receipt; names outside the descriptor set
    /// are dropped with a warning rather than widening the error mapping
    /// beyond the fields this form owns. The previous error mapping is
    /// replaced, not merged.
    pub fn apply_server_errors(&mut self, message: String, fields: Vec<(String, String)>) {
        let mut errors = ErrorMap::new();
        for (field, msg) in fields {
            let field = field.to_lowercase();
            if self.descriptor(&field).is_some() {
                errors.insert(field, msg);
            } else {
                tracing::warn!(field, "dropping server error for unknown field");
            }
        }
        self.response = Response { message, errors };
        self.bump();
    }

    /// Which banner the current state renders. `Succeeded` wins outright;
    /// otherwise field errors select the validation banner and a failed
    /// attempt without field detail selects the generic one.
    pub fn banner(&self) -> Banner {
        if self.status == SubmitStatus::Succeeded {
            Banner::Success
        } else if self.response.has_errors() {
            Banner::ValidationFailure
        } else if self.status == SubmitStatus::Failed {
            Banner::GenericFailure
        } else {
            Banner::None
        }
    }

    /// Returns bound fields for rendering, pairing each descriptor with its
    /// current value and error.
    pub fn bound_fields(&self) -> Vec<BoundField> {
        self.descriptors
            .iter()
            .map(|descriptor| BoundField::new(descriptor, self.value(&descriptor.id), self.response.error(&descriptor.id)))
            .collect()
    }

    fn banner_html(&self) -> String {
        let message = &self.response.message;
        match self.banner() {
            Banner::None => String::new(),
            Banner::Success => format!(
                r#"<div class="alert alert-info" role="alert">The form was successfully submitted! {message}</div>"#
            ),
            Banner::GenericFailure => format!(
                r#"<div class="alert alert-danger" role="alert">Sorry, an unexpected error has occurred {message}</div>"#
            ),
            Banner::ValidationFailure => format!(
                r#"<div class="alert alert-danger" role="alert">Sorry, the form is invalid. Please review, adjust and try again {message}</div>"#
            ),
        }
    }

    /// Renders the `<form>` wrapper around caller-supplied field markup:
    /// container, the injected markup, a submit button disabled while errors
    /// are present, and the banner for the current state.
    pub fn render(&self, config: &FormConfig, inner: &str) -> String {
        let container_class = config
            .class_name
            .as_deref()
            .map_or_else(|| "container".to_string(), |c| format!("container {c}"));
        let disabled = if self.response.has_errors() {
            " disabled"
        } else {
            ""
        };
        format!(
            concat!(
                r#"<form action="{action}" method="post" novalidate>"#,
                r#"<div class="{container}">"#,
                "{inner}",
                r#"<div class="form-group">"#,
                r#"<button type="submit" class="btn btn-primary"{disabled}>{label}</button>"#,
                "</div>",
                "{banner}",
                "</div>",
                "</form>"
            ),
            action = config.action,
            container = container_class,
            inner = inner,
            disabled = disabled,
            label = config.submit_label,
            banner = self.banner_html(),
        )
    }

    /// Like [`Form::render`], with the field markup supplied by a callback
    /// that sees the form's current state.
    pub fn render_with<F>(&self, config: &FormConfig, render: F) -> String
    where
        F: FnOnce(&Self) -> String,
    {
        let inner = render(self);
        self.render(config, &inner)
    }
}
