//! Confirmation view for an accepted submission

use maud::{html, Markup};

use crate::field::{ContactValues, FieldName};

/// Snapshot of the values of a valid submission
///
/// Values are kept as entered (untrimmed), matching what the visitor typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl SubmissionRecord {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::Message => &self.message,
        }
    }

    /// Render the confirmation markup; every value is HTML-escaped
    pub fn render(&self) -> Markup {
        html! {
            @for field in FieldName::ALL {
                p {
                    strong { (field.label()) ":" }
                    " "
                    (self.get(field))
                }
            }
        }
    }
}

impl From<ContactValues> for SubmissionRecord {
    fn from(values: ContactValues) -> Self {
        Self {
            name: values.name,
            email: values.email,
            phone: values.phone,
            message: values.message,
        }
    }
}
