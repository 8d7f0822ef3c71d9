//! The shared form handle: the read/write channel between a form and its
//! field components.
//!
//! Where the original toolkit exposed form state to descendants through
//! ambient context, [`FormHandle`] is an explicit, cloneable capability:
//! field components and hosts hold a handle and use it to read values and
//! errors, push value updates, and request per-field validation. A handle is
//! constructed *from* a form, so it cannot exist before its provider does.

use std::sync::{Arc, Mutex, PoisonError};

use formwork_core::value::{FieldValue, ValueMap};

use crate::bound_field::BoundField;
use crate::form::{Form, SubmitStatus};

/// A cloneable capability over one [`Form`] instance.
///
/// All clones observe the same state; any mutation made through one clone is
/// visible to every other, with the form's revision counter signalling
/// freshness. Locking is internal and never held across an await point by
/// this crate or the submission orchestrator.
#[derive(Debug, Clone)]
pub struct FormHandle {
    inner: Arc<Mutex<Form>>,
}

impl FormHandle {
    /// Wraps a form in a shared handle.
    pub fn new(form: Form) -> Self {
        Self {
            inner: Arc::new(Mutex::new(form)),
        }
    }

    /// Runs a closure against the form under the lock. The capability used
    /// by the submission orchestrator for its validate/record phases.
    ///
    /// A poisoned lock is recovered rather than propagated: form state is
    /// plain data and stays coherent even if a panic interrupted a writer.
    pub fn with<R>(&self, f: impl FnOnce(&mut Form) -> R) -> R {
        let mut form = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut form)
    }

    /// Reads the current value of one field.
    pub fn value(&self, id: &str) -> Option<FieldValue> {
        self.with(|form| form.value(id).cloned())
    }

    /// Reads the error message for one field; empty means valid.
    pub fn error(&self, id: &str) -> String {
        self.with(|form| form.response().error(id).to_string())
    }

    /// Merges values into the form, last-write-wins per key.
    pub fn set_values(&self, partial: ValueMap) {
        self.with(|form| form.set_values(partial));
    }

    /// Sets a single field's value.
    pub fn set_value(&self, id: impl Into<String>, value: impl Into<FieldValue>) {
        let (id, value) = (id.into(), value.into());
        self.with(|form| form.set_value(id, value));
    }

    /// Validates one field, returning the computed error message.
    pub fn validate_field(&self, id: &str) -> String {
        self.with(|form| form.validate_field(id))
    }

    /// Validates all fields; returns `true` when any field has an error.
    pub fn validate_all(&self) -> bool {
        self.with(Form::validate_all)
    }

    /// Reads the submission status.
    pub fn status(&self) -> SubmitStatus {
        self.with(|form| form.status())
    }

    /// Reads the form's revision counter.
    pub fn revision(&self) -> u64 {
        self.with(|form| form.revision())
    }

    /// Renders one field row (label, editor, inline error). Returns `None`
    /// for an id outside the descriptor set.
    pub fn render_field(&self, id: &str) -> Option<String> {
        self.with(|form| {
            form.descriptor(id)?;
            form.bound_fields()
                .iter()
                .find(|bound| bound.id == id)
                .map(BoundField::render)
        })
    }

    /// Renders every field row in descriptor order.
    pub fn render_fields(&self) -> String {
        self.with(|form| {
            form.bound_fields()
                .iter()
                .map(BoundField::render)
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldDescriptor;
    use crate::rules;

    fn make_handle() -> FormHandle {
        FormHandle::new(Form::new(vec![
            FieldDescriptor::new("email")
                .label("Email")
                .validation(rules::required),
            FieldDescriptor::new("name").label("Name"),
        ]))
    }

    #[test]
    fn test_clones_share_state() {
        let handle = make_handle();
        let other = handle.clone();
        handle.set_value("email", "a@b.com");
        assert_eq!(other.value("email").unwrap().as_text(), Some("a@b.com"));
    }

    #[test]
    fn test_revision_propagates_to_clones() {
        let handle = make_handle();
        let other = handle.clone();
        let before = other.revision();
        handle.validate_field("email");
        assert!(other.revision() > before);
    }

    #[test]
    fn test_validate_field_through_handle() {
        let handle = make_handle();
        let err = handle.validate_field("email");
        assert_eq!(err, "email is required");
        assert_eq!(handle.error("email"), "email is required");
    }

    #[test]
    fn test_validate_all_through_handle() {
        let handle = make_handle();
        assert!(handle.validate_all());
        handle.set_value("email", "a@b.com");
        assert!(!handle.validate_all());
    }

    #[test]
    fn test_render_field_unknown_id() {
        let handle = make_handle();
        assert!(handle.render_field("ghost").is_none());
    }

    #[test]
    fn test_render_field_known_id() {
        let handle = make_handle();
        handle.set_value("email", "a@b.com");
        let html = handle.render_field("email").unwrap();
        assert!(html.contains(r#"value="a@b.com""#));
    }

    #[test]
    fn test_render_fields_in_order() {
        let handle = make_handle();
        let html = handle.render_fields();
        let email_at = html.find(r#"id="email""#).unwrap();
        let name_at = html.find(r#"id="name""#).unwrap();
        assert!(email_at < name_at);
    }

    #[test]
    fn test_cross_thread_updates() {
        let handle = make_handle();
        let writer = handle.clone();
        let thread = std::thread::spawn(move || {
            writer.set_value("name", "Alice");
        });
        thread.join().unwrap();
        assert_eq!(handle.value("name").unwrap().as_text(), Some("Alice"));
    }
}
