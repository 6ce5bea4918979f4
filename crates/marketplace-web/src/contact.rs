//! Contact form surface over the DOM

use marketplace_forms::{FieldName, FormSurface, Markup};
use marketplace_page::{ClassNames, PageConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::dom::{by_id, require, set_class, warn};

/// The contact form as found in the page
///
/// Each input's parent element is its field container; the container's
/// error-message child holds the error text.
pub struct DomContactForm {
    form: HtmlFormElement,
    inputs: Vec<(FieldName, Element)>,
    result: Element,
    submitted: Element,
    classes: ClassNames,
}

impl DomContactForm {
    /// Locate the form; `Ok(None)` when the page has no contact form
    pub fn locate(document: &Document, config: &PageConfig) -> Result<Option<Self>, JsValue> {
        let ids = &config.elements;
        let form = match by_id(document, &ids.contact_form) {
            Some(form) => form
                .dyn_into::<HtmlFormElement>()
                .map_err(|_| JsValue::from_str("Contact form element is not a <form>"))?,
            None => return Ok(None),
        };

        let inputs = FieldName::ALL
            .into_iter()
            .map(|field| require::<Element>(document, ids.field_input(field)).map(|el| (field, el)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(Self {
            form,
            inputs,
            result: require(document, &ids.submission_result)?,
            submitted: require(document, &ids.submitted_data)?,
            classes: config.classes.clone(),
        }))
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    fn input(&self, field: FieldName) -> Option<&Element> {
        self.inputs
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, el)| el)
    }

    fn container(&self, field: FieldName) -> Option<Element> {
        self.input(field).and_then(|input| input.parent_element())
    }

    fn error_slot(&self, container: &Element) -> Option<Element> {
        container
            .query_selector(&format!(".{}", self.classes.error_message))
            .ok()
            .flatten()
    }
}

impl FormSurface for DomContactForm {
    fn field_value(&self, field: FieldName) -> String {
        let Some(input) = self.input(field) else {
            return String::new();
        };

        if let Some(input) = input.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = input.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            input.text_content().unwrap_or_default()
        }
    }

    fn set_error(&mut self, field: FieldName, message: &str) {
        let Some(container) = self.container(field) else {
            warn(&format!("No container for field '{}'", field));
            return;
        };

        set_class(&container, &self.classes.error, true);
        if let Some(slot) = self.error_slot(&container) {
            slot.set_text_content(Some(message));
        }
    }

    fn clear_error(&mut self, field: FieldName) {
        if let Some(container) = self.container(field) {
            set_class(&container, &self.classes.error, false);
            if let Some(slot) = self.error_slot(&container) {
                slot.set_text_content(Some(""));
            }
        }
    }

    fn render_confirmation(&mut self, content: Markup) {
        self.submitted.set_inner_html(&content.into_string());
    }

    fn show_confirmation(&mut self) {
        set_class(&self.result, &self.classes.hidden, false);
    }

    fn hide_confirmation(&mut self) {
        set_class(&self.result, &self.classes.hidden, true);
    }

    fn reset_fields(&mut self) {
        self.form.reset();
    }

    fn scroll_to_confirmation(&mut self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        self.result
            .scroll_into_view_with_scroll_into_view_options(&options);
    }
}

