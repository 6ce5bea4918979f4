//! Display surface for the contact form

use maud::Markup;

use crate::field::FieldName;

/// Operations the validator needs from whatever displays the form
///
/// The browser adapter maps these onto DOM elements; [`MemoryForm`] records
/// them for tests.
///
/// [`MemoryForm`]: crate::memory::MemoryForm
pub trait FormSurface {
    /// Current raw value of a field
    fn field_value(&self, field: FieldName) -> String;

    /// Mark the field container as failing and show `message` next to it
    fn set_error(&mut self, field: FieldName, message: &str);

    /// Remove the error state and message from a field container
    fn clear_error(&mut self, field: FieldName);

    /// Replace the confirmation panel content with already-escaped markup
    fn render_confirmation(&mut self, content: Markup);

    fn show_confirmation(&mut self);

    fn hide_confirmation(&mut self);

    /// Clear every input back to its initial value
    fn reset_fields(&mut self);

    /// Bring the confirmation panel into view
    fn scroll_to_confirmation(&mut self) {}

    /// Clear error state on every field
    fn clear_all_errors(&mut self) {
        for field in FieldName::ALL {
            self.clear_error(field);
        }
    }
}
