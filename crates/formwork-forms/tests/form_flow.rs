//! Integration tests for the form state machine and rendering pipeline.
//!
//! These tests exercise a realistic sign-up form end to end, covering:
//! 1. Value store and validation flow
//! 2. Shared-handle usage the way field components drive it
//! 3. Rendering: field rows, wrapper, and banners

use formwork_core::value::{FieldValue, ValueMap};
use formwork_forms::fields::{EditorKind, FieldDescriptor};
use formwork_forms::form::{Banner, Form, FormConfig, SubmitStatus};
use formwork_forms::handle::FormHandle;
use formwork_forms::rules::{self, RuleArgs};

// ============================================================================
// Shared helpers
// ============================================================================

/// A sign-up form: email, password + confirmation, bio, country.
fn make_signup_form() -> Form {
    Form::new(vec![
        FieldDescriptor::new("email")
            .label("Email")
            .validation(rules::is_email),
        FieldDescriptor::new("password")
            .label("Password")
            .validation_with(rules::min_length, RuleArgs::Length(8)),
        FieldDescriptor::new("confirm")
            .label("Confirm password")
            .validation_with(rules::matches_field, RuleArgs::Field("password".to_string())),
        FieldDescriptor::new("bio")
            .label("About you")
            .editor(EditorKind::MultilineTextbox)
            .validation_with(rules::max_length, RuleArgs::Length(200)),
        FieldDescriptor::new("country")
            .label("Country")
            .editor(EditorKind::Dropdown)
            .options(vec!["PL".to_string(), "DE".to_string(), "FR".to_string()])
            .initial("PL"),
    ])
}

fn fill_valid(form: &mut Form) {
    let mut values = ValueMap::new();
    values.insert("email".to_string(), "alice@example.com".into());
    values.insert("password".to_string(), "correct horse".into());
    values.insert("confirm".to_string(), "correct horse".into());
    values.insert("bio".to_string(), "Hi.".into());
    values.insert("country".to_string(), "DE".into());
    form.set_values(values);
}

// ============================================================================
// Category 1: Value store and validation flow
// ============================================================================

#[test]
fn test_empty_form_validates_clean_when_nothing_is_required() {
    let mut form = make_signup_form();
    // Every rule here passes empty input through; only `required` rejects it.
    assert!(!form.validate_all());
    assert_eq!(form.response().errors.len(), 5);
}

#[test]
fn test_valid_input_passes_all_rules() {
    let mut form = make_signup_form();
    fill_valid(&mut form);
    assert!(!form.validate_all());
    assert!(!form.response().has_errors());
}

#[test]
fn test_errors_accumulate_across_fields() {
    let mut form = make_signup_form();
    form.set_value("email", "not-an-email");
    form.set_value("password", "short");
    form.set_value("confirm", "different");
    assert!(form.validate_all());
    assert!(!form.response().is_field_valid("email"));
    assert!(!form.response().is_field_valid("password"));
    assert!(!form.response().is_field_valid("confirm"));
    assert!(form.response().is_field_valid("bio"));
}

#[test]
fn test_cross_field_rule_sees_whole_mapping() {
    let mut form = make_signup_form();
    form.set_value("password", "correct horse");
    form.set_value("confirm", "wrong pony");
    assert!(!form.validate_field("confirm").is_empty());

    form.set_value("confirm", "correct horse");
    assert_eq!(form.validate_field("confirm"), "");
}

#[test]
fn test_fixing_a_field_clears_its_error_on_revalidation() {
    let mut form = make_signup_form();
    form.set_value("email", "broken");
    form.validate_field("email");
    assert!(!form.response().is_field_valid("email"));

    form.set_value("email", "fixed@example.com");
    form.validate_field("email");
    assert!(form.response().is_field_valid("email"));
}

#[test]
fn test_revision_is_strictly_monotonic_across_repeated_validation() {
    let mut form = make_signup_form();
    let mut last = form.revision();
    for _ in 0..3 {
        form.validate_all();
        assert!(form.revision() > last);
        last = form.revision();
    }
}

// ============================================================================
// Category 2: Shared-handle usage
// ============================================================================

#[test]
fn test_field_component_flow_through_handle() {
    let handle = FormHandle::new(make_signup_form());

    // A field component writes on change and validates on blur.
    handle.set_value("email", "alice@example");
    let on_blur = handle.validate_field("email");
    assert!(!on_blur.is_empty());

    handle.set_value("email", "alice@example.com");
    assert_eq!(handle.validate_field("email"), "");
    assert_eq!(handle.error("email"), "");
}

#[test]
fn test_handle_clones_observe_each_other() {
    let handle = FormHandle::new(make_signup_form());
    let field_side = handle.clone();

    field_side.set_value("country", "FR");
    assert_eq!(handle.value("country").unwrap(), FieldValue::from("FR"));

    let before = field_side.revision();
    handle.validate_all();
    assert!(field_side.revision() > before);
}

// ============================================================================
// Category 3: Rendering
// ============================================================================

#[test]
fn test_render_fields_shows_initial_until_edited() {
    let handle = FormHandle::new(make_signup_form());
    let html = handle.render_field("country").unwrap();
    assert!(html.contains(r#"<option value="PL" selected>PL</option>"#));

    handle.set_value("country", "DE");
    let html = handle.render_field("country").unwrap();
    assert!(html.contains(r#"<option value="DE" selected>DE</option>"#));
}

#[test]
fn test_render_flags_invalid_field_inline() {
    let handle = FormHandle::new(make_signup_form());
    handle.set_value("password", "short");
    handle.validate_field("password");
    let html = handle.render_field("password").unwrap();
    assert!(html.contains("border-color: red"));
    assert!(html.contains("password must be at least 8 characters"));
}

#[test]
fn test_full_form_render_with_banner_progression() {
    let mut form = make_signup_form();
    let config = FormConfig::new("/api/signup").submit_label("Sign up");

    // Fresh form: no banner, button enabled.
    assert_eq!(form.banner(), Banner::None);
    let html = form.render(&config, "");
    assert!(!html.contains("alert"));
    assert!(!html.contains("disabled"));

    // Invalid input: validation banner, button disabled.
    form.set_value("email", "nope");
    form.validate_all();
    assert_eq!(form.banner(), Banner::ValidationFailure);
    let html = form.render(&config, "");
    assert!(html.contains("Sorry, the form is invalid"));
    assert!(html.contains("disabled"));

    // Fixed and accepted: success banner.
    fill_valid(&mut form);
    form.validate_all();
    form.record_outcome(true);
    assert_eq!(form.banner(), Banner::Success);
    assert!(form
        .render(&config, "")
        .contains("The form was successfully submitted!"));
}

#[test]
fn test_render_embeds_field_markup() {
    let handle = FormHandle::new(make_signup_form());
    let fields = handle.render_fields();
    let html = handle.with(|form| form.render(&FormConfig::new("/api/signup"), &fields));
    assert!(html.contains(r#"id="email""#));
    assert!(html.contains(r#"id="bio""#));
    assert!(html.contains("<select"));
    assert!(html.contains("<textarea"));
}

#[test]
fn test_submit_status_starts_unset() {
    let form = make_signup_form();
    assert_eq!(form.status(), SubmitStatus::NotSubmitted);
    assert_eq!(form.status().submit_success(), None);
}
