//! Marketplace Forms
//!
//! Contact form validation decoupled from the display layer. The rules live in
//! pure functions; a [`FormSurface`] implementation supplies field values and
//! receives the error markers and the confirmation view.

pub mod field;
pub mod memory;
pub mod predicates;
pub mod result;
pub mod submission;
pub mod surface;
pub mod validator;

pub use field::{contact_fields, ContactValues, FieldName, FormField};
pub use memory::MemoryForm;
pub use predicates::{is_blank, is_valid_email, is_valid_phone};
pub use result::ValidationResult;
pub use submission::SubmissionRecord;
pub use surface::FormSurface;
pub use validator::{validate, ContactForm};

// Re-export Maud so surfaces can name the markup type
pub use maud::{Markup, PreEscaped};
