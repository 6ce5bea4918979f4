//! Integration tests for the contact form submit flow
//!
//! Drives `ContactForm` through `MemoryForm` the way the page drives it
//! through the DOM.

use marketplace_forms::*;
use pretty_assertions::assert_eq;

fn valid_values() -> ContactValues {
    ContactValues::new("Jo", "jo@x.com", "5551234567", "hi")
}

#[test]
fn test_empty_submission_shows_four_errors() {
    let mut form = ContactForm::new(MemoryForm::new());

    let result = form.submit();

    assert!(!result.is_valid);
    assert_eq!(result.error_count(), 4);
    let surface = form.surface();
    assert_eq!(surface.error_count(), 4);
    for field in FieldName::ALL {
        assert_eq!(surface.error(field), Some(field.required_message()));
    }
    assert!(!surface.is_confirmation_visible());
    assert_eq!(surface.confirmation_html(), "");
}

#[test]
fn test_valid_submission_shows_confirmation() {
    let mut form = ContactForm::new(MemoryForm::with_values(&valid_values()));

    let result = form.submit();

    assert!(result.is_valid);
    let surface = form.surface();
    assert!(surface.is_confirmation_visible());
    assert_eq!(
        surface.confirmation_html(),
        "<p><strong>Name:</strong> Jo</p>\
         <p><strong>Email:</strong> jo@x.com</p>\
         <p><strong>Phone:</strong> 5551234567</p>\
         <p><strong>Message:</strong> hi</p>"
    );
    assert_eq!(surface.scroll_requests(), 1);
    assert_eq!(surface.error_count(), 0);
    for field in FieldName::ALL {
        assert_eq!(surface.field_value(field), "");
    }
}

#[test]
fn test_corrected_submission_clears_stale_errors() {
    let mut form = ContactForm::new(MemoryForm::with_values(&ContactValues::new(
        "", "foo", "123", "hi",
    )));

    let first = form.submit();
    assert_eq!(first.error_count(), 3);
    assert_eq!(form.surface().error(FieldName::Email), Some("Please enter a valid email address."));

    // Fix name and email only
    form.surface_mut().set_value(FieldName::Name, "Jo");
    form.surface_mut().set_value(FieldName::Email, "jo@x.com");
    let second = form.submit();

    assert_eq!(second.error_count(), 1);
    let surface = form.surface();
    assert!(!surface.has_error(FieldName::Name));
    assert!(!surface.has_error(FieldName::Email));
    assert!(!surface.has_error(FieldName::Message));
    assert_eq!(
        surface.error(FieldName::Phone),
        Some("Please enter a valid phone number (at least 7 digits).")
    );

    form.surface_mut().set_value(FieldName::Phone, "1234567");
    let third = form.submit();

    assert!(third.is_valid);
    assert_eq!(form.surface().error_count(), 0);
    assert!(form.surface().is_confirmation_visible());
}

#[test]
fn test_failure_after_success_hides_confirmation() {
    let mut form = ContactForm::new(MemoryForm::with_values(&valid_values()));
    assert!(form.submit().is_valid);
    assert!(form.surface().is_confirmation_visible());

    // Fields were reset, so the next submit fails on every field
    let result = form.submit();

    assert_eq!(result.error_count(), 4);
    assert!(!form.surface().is_confirmation_visible());
}

#[test]
fn test_script_in_message_is_inert() {
    let mut values = valid_values();
    values.message = "<script>alert(1)</script>".to_string();
    let mut form = ContactForm::new(MemoryForm::with_values(&values));

    assert!(form.submit().is_valid);

    let html = form.surface().confirmation_html();
    assert!(!html.contains("<script>"));
    assert!(html
        .contains("<p><strong>Message:</strong> &lt;script&gt;alert(1)&lt;/script&gt;</p>"));
}

#[test]
fn test_confirmation_echoes_untrimmed_values() {
    let mut values = valid_values();
    values.name = "  Jo  ".to_string();
    let mut form = ContactForm::new(MemoryForm::with_values(&values));

    assert!(form.submit().is_valid);
    assert!(form
        .surface()
        .confirmation_html()
        .contains("<p><strong>Name:</strong>   Jo  </p>"));
}
