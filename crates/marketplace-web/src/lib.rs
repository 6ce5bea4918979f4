//! Marketplace Web
//!
//! WebAssembly entry point for the marketplace page. Wires navigation,
//! scrolling, the welcome overlay and the contact form once the document is
//! ready, and exposes the contact validators to JavaScript.
//!
//! Page settings may be embedded as TOML:
//!
//! ```html
//! <script type="application/toml" id="marketplace-config">
//! [welcome]
//! fallback_name = "Friend"
//! </script>
//! ```

use marketplace_forms as forms;
use marketplace_page::PageConfig;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

mod contact;
mod dom;
mod logging;
mod page;
mod session;

pub use contact::DomContactForm;
pub use page::init as init_page;
pub use session::DomSessionStore;

/// Id of the optional element holding the page configuration
pub const CONFIG_ELEMENT_ID: &str = "marketplace-config";

/// Module start: wire the page now, or on `DOMContentLoaded` if still parsing
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    logging::init();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    if is_parsing(&document.ready_state()) {
        let target = document.clone();
        dom::listen(&target, "DOMContentLoaded", move |_event| {
            if let Err(e) = wire(&window, &document) {
                dom::warn(&format!("Page init failed: {:?}", e));
            }
        })
    } else {
        wire(&window, &document)
    }
}

fn wire(window: &Window, document: &Document) -> Result<(), JsValue> {
    let config = read_page_config(document)?;
    page::init(window, document, &config)
}

/// `document.readyState` while the HTML is still being parsed
fn is_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Read the embedded TOML configuration, or the defaults when absent
pub fn read_page_config(document: &Document) -> Result<PageConfig, JsValue> {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(PageConfig::default());
    };

    let text = element.text_content().unwrap_or_default();
    PageConfig::parse(&text)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse page config: {:#}", e)))
}

/// Validate contact values without touching the DOM
///
/// # Example (JavaScript)
/// ```javascript
/// const { isValid, fieldErrors } = validateContact({
///     name: 'Jo', email: 'jo@x.com', phone: '5551234567', message: 'hi'
/// });
/// ```
#[wasm_bindgen(js_name = validateContact)]
pub fn validate_contact(values: JsValue) -> Result<JsValue, JsValue> {
    let values: forms::ContactValues = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse values: {}", e)))?;

    let result = forms::validate(&values);

    // Plain object for fieldErrors rather than a JS Map
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(result.serialize(&serializer)?)
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    forms::is_valid_email(email.trim())
}

/// Quick phone validation
#[wasm_bindgen(js_name = isValidPhone)]
pub fn is_valid_phone_js(phone: &str) -> bool {
    forms::is_valid_phone(phone.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_email_validation() {
        assert!(is_valid_email_js("user@example.com"));
        assert!(is_valid_email_js(" user@example.com "));
        assert!(!is_valid_email_js("invalid-email"));
    }

    #[wasm_bindgen_test]
    fn test_phone_validation() {
        assert!(is_valid_phone_js("1234567"));
        assert!(!is_valid_phone_js("12-3456"));
    }

    #[test]
    fn test_ready_state_parsing() {
        assert!(is_parsing("loading"));
        assert!(!is_parsing("interactive"));
        assert!(!is_parsing("complete"));
    }
}
