// File: src/field.rs
// Purpose: Contact form fields and the rule table applied to them

use serde::{Deserialize, Serialize};

use crate::predicates::{is_blank, is_valid_email, is_valid_phone};

/// Predicate applied to a trimmed, non-empty value
pub type Predicate = fn(&str) -> bool;

/// The fields of the contact form, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Message,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Message,
    ];

    /// Stable identifier of the input element
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::Message => "message",
        }
    }

    /// Label used in the confirmation view
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::Email => "Email",
            FieldName::Phone => "Phone",
            FieldName::Message => "Message",
        }
    }

    pub fn required_message(&self) -> &'static str {
        match self {
            FieldName::Name => "Name is required.",
            FieldName::Email => "Email is required.",
            FieldName::Phone => "Phone number is required.",
            FieldName::Message => "Message is required.",
        }
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw values of the four contact fields, as read from the input surface
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactValues {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

impl ContactValues {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::Message => &self.message,
        }
    }
}

/// One field together with the rule that applies to it
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub value: String,
    pub required: bool,
    pub validator: Option<Predicate>,
    /// Shown when `validator` rejects the value
    pub error_message: &'static str,
}

impl FormField {
    /// Returns the error message for this field, if any
    ///
    /// A blank required field reports its required message and skips the
    /// validator. An optional blank field always passes.
    pub fn check(&self) -> Option<String> {
        let trimmed = self.value.trim();

        if is_blank(trimmed) {
            return self
                .required
                .then(|| self.name.required_message().to_string());
        }

        match self.validator {
            Some(validator) if !validator(trimmed) => Some(self.error_message.to_string()),
            _ => None,
        }
    }
}

/// Builds the contact form rule table from freshly read values
pub fn contact_fields(values: &ContactValues) -> [FormField; 4] {
    [
        FormField {
            name: FieldName::Name,
            value: values.name.clone(),
            required: true,
            validator: None,
            error_message: "",
        },
        FormField {
            name: FieldName::Email,
            value: values.email.clone(),
            required: true,
            validator: Some(is_valid_email),
            error_message: "Please enter a valid email address.",
        },
        FormField {
            name: FieldName::Phone,
            value: values.phone.clone(),
            required: true,
            validator: Some(is_valid_phone),
            error_message: "Please enter a valid phone number (at least 7 digits).",
        },
        FormField {
            name: FieldName::Message,
            value: values.message.clone(),
            required: true,
            validator: None,
            error_message: "",
        },
    ]
}
