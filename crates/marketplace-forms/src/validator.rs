// File: src/validator.rs
// Purpose: Contact form validation and the submit flow over a display surface

use std::collections::BTreeMap;

use tracing::debug;

use crate::field::{contact_fields, ContactValues, FieldName};
use crate::result::ValidationResult;
use crate::submission::SubmissionRecord;
use crate::surface::FormSurface;

/// Validate the four contact fields
///
/// Every rule runs; a failing field never stops the ones after it.
pub fn validate(values: &ContactValues) -> ValidationResult {
    let field_errors: BTreeMap<FieldName, String> = contact_fields(values)
        .iter()
        .filter_map(|field| field.check().map(|message| (field.name, message)))
        .collect();

    ValidationResult::from_errors(field_errors)
}

/// Contact form bound to a display surface
///
/// Created once when the page is ready; each call to [`submit`](Self::submit)
/// handles one submit event.
pub struct ContactForm<S: FormSurface> {
    surface: S,
}

impl<S: FormSurface> ContactForm<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Read the current values without caching them
    pub fn read_values(&self) -> ContactValues {
        ContactValues {
            name: self.surface.field_value(FieldName::Name),
            email: self.surface.field_value(FieldName::Email),
            phone: self.surface.field_value(FieldName::Phone),
            message: self.surface.field_value(FieldName::Message),
        }
    }

    /// Handle a submit: validate, then show either the errors or the confirmation
    pub fn submit(&mut self) -> ValidationResult {
        let values = self.read_values();
        let result = validate(&values);

        self.surface.clear_all_errors();

        if result.is_valid {
            let record = SubmissionRecord::from(values);
            self.surface.render_confirmation(record.render());
            self.surface.show_confirmation();
            self.surface.reset_fields();
            self.surface.clear_all_errors();
            self.surface.scroll_to_confirmation();
            debug!("contact form accepted");
        } else {
            for (field, message) in &result.field_errors {
                self.surface.set_error(*field, message);
            }
            self.surface.hide_confirmation();
            debug!(failed_fields = result.error_count(), "contact form rejected");
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryForm;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_all_empty_reports_every_field() {
        let result = validate(&ContactValues::default());
        assert!(!result.is_valid);
        assert_eq!(result.error_count(), 4);
        assert_eq!(result.error(FieldName::Name), Some("Name is required."));
        assert_eq!(result.error(FieldName::Email), Some("Email is required."));
        assert_eq!(result.error(FieldName::Phone), Some("Phone number is required."));
        assert_eq!(result.error(FieldName::Message), Some("Message is required."));
    }

    #[test]
    fn test_valid_values() {
        let result = validate(&ContactValues::new("Jo", "jo@x.com", "5551234567", "hi"));
        assert_eq!(result, ValidationResult::success());
    }

    #[test]
    fn test_invalid_email_format_message() {
        let result = validate(&ContactValues::new("Jo", "foo", "5551234567", "hi"));
        assert_eq!(result.error(FieldName::Email), Some("Please enter a valid email address."));
        assert_eq!(result.error_count(), 1);
    }

    #[rstest]
    #[case("123456", false)]
    #[case("1234567", true)]
    #[case("12-3456", false)]
    #[case("  1234567 ", true)]
    fn test_phone_rule(#[case] phone: &str, #[case] valid: bool) {
        let result = validate(&ContactValues::new("Jo", "jo@x.com", phone, "hi"));
        assert_eq!(result.is_valid, valid);
        if !valid {
            assert_eq!(
                result.error(FieldName::Phone),
                Some("Please enter a valid phone number (at least 7 digits).")
            );
        }
    }

    #[test]
    fn test_whitespace_only_is_required_error() {
        let result = validate(&ContactValues::new(" ", "\t", "  ", "\n"));
        assert_eq!(result.error(FieldName::Email), Some("Email is required."));
        assert_eq!(result.error(FieldName::Phone), Some("Phone number is required."));
        assert_eq!(result.error_count(), 4);
    }

    #[test]
    fn test_submit_failure_hides_confirmation() {
        let mut form = ContactForm::new(MemoryForm::new());
        form.surface_mut().show_confirmation();

        let result = form.submit();

        assert!(!result.is_valid);
        assert!(!form.surface().is_confirmation_visible());
        assert_eq!(form.surface().error_count(), 4);
        assert_eq!(form.surface().scroll_requests(), 0);
    }

    #[test]
    fn test_submit_failure_keeps_values() {
        let values = ContactValues::new("Jo", "foo", "5551234567", "hi");
        let mut form = ContactForm::new(MemoryForm::with_values(&values));

        form.submit();

        assert_eq!(form.read_values(), values);
    }
}
