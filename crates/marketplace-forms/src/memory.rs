//! In-memory form surface
//!
//! Holds field values, error markers and the confirmation panel in plain
//! collections. Used by tests and by hosts without a DOM.

use std::collections::BTreeMap;

use maud::Markup;

use crate::field::{ContactValues, FieldName};
use crate::surface::FormSurface;

#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    values: BTreeMap<FieldName, String>,
    errors: BTreeMap<FieldName, String>,
    confirmation_html: String,
    confirmation_visible: bool,
    scroll_requests: usize,
}

impl MemoryForm {
    /// Create an empty form with the confirmation panel hidden
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: &ContactValues) -> Self {
        let mut form = Self::new();
        form.fill(values);
        form
    }

    /// Type into every field at once
    pub fn fill(&mut self, values: &ContactValues) {
        for field in FieldName::ALL {
            self.set_value(field, values.get(field));
        }
    }

    pub fn set_value(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Error message currently displayed for a field
    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(|s| s.as_str())
    }

    pub fn has_error(&self, field: FieldName) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn confirmation_html(&self) -> &str {
        &self.confirmation_html
    }

    pub fn is_confirmation_visible(&self) -> bool {
        self.confirmation_visible
    }

    /// Number of times the panel was scrolled into view
    pub fn scroll_requests(&self) -> usize {
        self.scroll_requests
    }
}

impl FormSurface for MemoryForm {
    fn field_value(&self, field: FieldName) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn set_error(&mut self, field: FieldName, message: &str) {
        self.errors.insert(field, message.to_string());
    }

    fn clear_error(&mut self, field: FieldName) {
        self.errors.remove(&field);
    }

    fn render_confirmation(&mut self, content: Markup) {
        self.confirmation_html = content.into_string();
    }

    fn show_confirmation(&mut self) {
        self.confirmation_visible = true;
    }

    fn hide_confirmation(&mut self) {
        self.confirmation_visible = false;
    }

    fn reset_fields(&mut self) {
        self.values.clear();
    }

    fn scroll_to_confirmation(&mut self) {
        self.scroll_requests += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form() {
        let form = MemoryForm::new();
        assert_eq!(form.field_value(FieldName::Email), "");
        assert!(!form.is_confirmation_visible());
        assert_eq!(form.error_count(), 0);
    }

    #[test]
    fn test_errors_replace_and_clear() {
        let mut form = MemoryForm::new();
        form.set_error(FieldName::Email, "Email is required.");
        form.set_error(FieldName::Email, "Please enter a valid email address.");
        assert_eq!(form.error_count(), 1);
        assert_eq!(form.error(FieldName::Email), Some("Please enter a valid email address."));

        form.clear_all_errors();
        assert!(!form.has_error(FieldName::Email));
    }

    #[test]
    fn test_reset_fields() {
        let values = ContactValues::new("Jo", "jo@x.com", "5551234567", "hi");
        let mut form = MemoryForm::with_values(&values);
        assert_eq!(form.field_value(FieldName::Name), "Jo");

        form.reset_fields();
        for field in FieldName::ALL {
            assert_eq!(form.field_value(field), "");
        }
    }
}
