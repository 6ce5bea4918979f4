// File: src/config.rs
// Purpose: Page configuration parsed from TOML embedded in the page

use anyhow::{Context, Result};
use marketplace_forms::FieldName;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Page configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PageConfig {
    #[serde(default)]
    pub elements: ElementIds,

    #[serde(default)]
    pub classes: ClassNames,

    #[serde(default)]
    pub welcome: WelcomeConfig,
}

/// Element ids (and the header selector) the page scripts look up
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ElementIds {
    pub menu_button: String,
    pub menu: String,
    /// CSS selector for the fixed header whose height offsets scrolling
    pub header_selector: String,
    pub welcome_overlay: String,
    pub welcome_box: String,
    pub name_form: String,
    pub name_input: String,
    pub welcome_message: String,
    pub contact_form: String,
    pub name_field: String,
    pub email_field: String,
    pub phone_field: String,
    pub message_field: String,
    pub submission_result: String,
    pub submitted_data: String,
}

/// CSS classes toggled by the page scripts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClassNames {
    pub hidden: String,
    pub visible: String,
    pub error: String,
    pub error_message: String,
}

/// Welcome overlay settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WelcomeConfig {
    /// Session storage key holding the visitor's name
    pub session_key: String,

    /// Name used when the visitor submits an empty form
    pub fallback_name: String,

    /// Delay before the welcome box fades in
    pub reveal_delay_ms: u64,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            menu_button: "mobile-menu-button".to_string(),
            menu: "mobile-menu".to_string(),
            header_selector: "header".to_string(),
            welcome_overlay: "welcome-overlay".to_string(),
            welcome_box: "welcome-box".to_string(),
            name_form: "name-form".to_string(),
            name_input: "name-input".to_string(),
            welcome_message: "welcome-message".to_string(),
            contact_form: "contactForm".to_string(),
            name_field: FieldName::Name.as_str().to_string(),
            email_field: FieldName::Email.as_str().to_string(),
            phone_field: FieldName::Phone.as_str().to_string(),
            message_field: FieldName::Message.as_str().to_string(),
            submission_result: "formSubmissionResult".to_string(),
            submitted_data: "submittedData".to_string(),
        }
    }
}

impl ElementIds {
    /// Element id of a contact form input
    pub fn field_input(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name_field,
            FieldName::Email => &self.email_field,
            FieldName::Phone => &self.phone_field,
            FieldName::Message => &self.message_field,
        }
    }
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            hidden: "hidden".to_string(),
            visible: "visible".to_string(),
            error: "error".to_string(),
            error_message: "error-message".to_string(),
        }
    }
}

impl Default for WelcomeConfig {
    fn default() -> Self {
        Self {
            session_key: "userName".to_string(),
            fallback_name: "Guest".to_string(),
            reveal_delay_ms: 500,
        }
    }
}

impl WelcomeConfig {
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

impl PageConfig {
    /// Parse configuration from TOML text; empty text yields the defaults
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: PageConfig = toml::from_str(content).context("Invalid page configuration")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PageConfig::default();
        assert_eq!(config.elements.contact_form, "contactForm");
        assert_eq!(config.elements.header_selector, "header");
        assert_eq!(config.classes.error_message, "error-message");
        assert_eq!(config.welcome.session_key, "userName");
        assert_eq!(config.welcome.fallback_name, "Guest");
        assert_eq!(config.welcome.reveal_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_empty_config() {
        let config = PageConfig::parse("  \n").unwrap();
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [welcome]
            fallback_name = "Friend"
            reveal_delay_ms = 250

            [elements]
            contact_form = "contact"
        "#;
        let config = PageConfig::parse(toml).unwrap();
        assert_eq!(config.welcome.fallback_name, "Friend");
        assert_eq!(config.welcome.session_key, "userName");
        assert_eq!(config.welcome.reveal_delay_ms, 250);
        assert_eq!(config.elements.contact_form, "contact");
        assert_eq!(config.elements.menu, "mobile-menu");
        assert_eq!(config.classes, ClassNames::default());
    }

    #[test]
    fn test_invalid_config() {
        let err = PageConfig::parse("[welcome]\nreveal_delay_ms = \"soon\"").unwrap_err();
        assert!(err.to_string().contains("Invalid page configuration"));
    }

    #[test]
    fn test_field_input_ids() {
        let ids = ElementIds::default();
        assert_eq!(ids.field_input(FieldName::Phone), "phone");
        assert_eq!(ids.field_input(FieldName::Message), "message");
    }

    #[test]
    fn test_configured_field_input_ids() {
        let toml = r#"
            [elements]
            email_field = "contact-email"
        "#;
        let config = PageConfig::parse(toml).unwrap();
        assert_eq!(config.elements.field_input(FieldName::Email), "contact-email");
        assert_eq!(config.elements.field_input(FieldName::Name), "name");
    }
}
