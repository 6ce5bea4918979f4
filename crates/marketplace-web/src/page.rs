//! Event wiring for the whole page
//!
//! Every handler runs to completion on the browser's event loop; shared state
//! sits in `Rc<RefCell<_>>` and is only borrowed inside a handler.

use std::cell::RefCell;
use std::rc::Rc;

use marketplace_forms::ContactForm;
use marketplace_page::{
    scroll_offset, AnchorTarget, MobileMenu, PageConfig, WelcomeOverlay, WelcomeStart,
    ANCHOR_SELECTOR,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, ScrollBehavior, ScrollToOptions, Window,
};

use crate::contact::DomContactForm;
use crate::dom::{by_id, listen, offset_height, require, set_class, warn, warn_on_err};
use crate::session::DomSessionStore;

type SharedMenu = Rc<RefCell<MobileMenu>>;

/// Wire every page behavior against the current document
///
/// Menu and anchor wiring failures abort; a broken welcome overlay or contact
/// form is logged and skipped so the rest of the page keeps working.
pub fn init(window: &Window, document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let menu = init_menu(document, config)?;
    init_anchors(window, document, config, menu)?;

    if let Err(e) = init_welcome(window, document, config) {
        warn(&format!("Welcome overlay disabled: {:?}", e));
    }

    if let Err(e) = init_contact_form(document, config) {
        warn(&format!("Contact form disabled: {:?}", e));
    }

    Ok(())
}

/// Returns the menu element with its state when the menu exists
fn init_menu(
    document: &Document,
    config: &PageConfig,
) -> Result<Option<(Element, SharedMenu)>, JsValue> {
    let Some(menu_el) = by_id(document, &config.elements.menu) else {
        return Ok(None);
    };

    let hidden_class = config.classes.hidden.clone();
    let state = Rc::new(RefCell::new(MobileMenu::with_hidden(
        menu_el.class_list().contains(&hidden_class),
    )));

    // The toggle needs both the button and the menu
    if let Some(button) = by_id(document, &config.elements.menu_button) {
        let menu_el = menu_el.clone();
        let state = state.clone();
        listen(&button, "click", move |_event| {
            let hidden = state.borrow_mut().toggle();
            set_class(&menu_el, &hidden_class, hidden);
        })?;
    }

    Ok(Some((menu_el, state)))
}

fn init_anchors(
    window: &Window,
    document: &Document,
    config: &PageConfig,
    menu: Option<(Element, SharedMenu)>,
) -> Result<(), JsValue> {
    let anchors = document.query_selector_all(ANCHOR_SELECTOR)?;

    for index in 0..anchors.length() {
        let anchor = anchors
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok());
        let Some(anchor) = anchor else {
            continue;
        };

        let window = window.clone();
        let document = document.clone();
        let menu = menu.clone();
        let hidden_class = config.classes.hidden.clone();
        let header_selector = config.elements.header_selector.clone();
        let link = anchor.clone();

        listen(&anchor, "click", move |event| {
            event.prevent_default();

            if let Some((menu_el, state)) = &menu {
                if state.borrow_mut().close() {
                    set_class(menu_el, &hidden_class, true);
                }
            }

            let href = link.get_attribute("href");
            let Some(target) = href.as_deref().and_then(AnchorTarget::parse) else {
                return;
            };
            let Some(element) = document.get_element_by_id(target.id()) else {
                return;
            };

            let header = document.query_selector(&header_selector).ok().flatten();
            let top = scroll_offset(
                element.get_bounding_client_rect().top(),
                window.page_y_offset().unwrap_or(0.0),
                offset_height(header),
            );

            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })?;
    }

    Ok(())
}

fn init_welcome(window: &Window, document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let ids = &config.elements;
    let overlay_el: HtmlElement = require(document, &ids.welcome_overlay)?;
    let welcome_box: Element = require(document, &ids.welcome_box)?;
    let name_form: Element = require(document, &ids.name_form)?;
    let name_input: HtmlInputElement = require(document, &ids.name_input)?;
    let message: Element = require(document, &ids.welcome_message)?;

    let overlay = WelcomeOverlay::new(config.welcome.clone());
    let mut store = DomSessionStore::new(window);
    let hidden_class = config.classes.hidden.clone();

    match overlay.on_load(&store) {
        WelcomeStart::Returning { greeting } => {
            message.set_text_content(Some(&greeting));
            set_class(&overlay_el, &hidden_class, true);
            warn_on_err(overlay_el.style().set_property("display", "none"), "hide overlay");
        }
        WelcomeStart::FirstVisit { reveal_after } => {
            let visible_class = config.classes.visible.clone();
            let reveal = Closure::once_into_js(move || {
                set_class(&welcome_box, &visible_class, true);
            });
            let delay = i32::try_from(reveal_after.as_millis()).unwrap_or(i32::MAX);
            window.set_timeout_with_callback_and_timeout_and_arguments_0(
                reveal.unchecked_ref(),
                delay,
            )?;

            listen(&name_form, "submit", move |event| {
                event.prevent_default();
                let greeting = overlay.submit_name(&mut store, &name_input.value());
                message.set_text_content(Some(&greeting));
                set_class(&overlay_el, &hidden_class, true);
            })?;
        }
    }

    Ok(())
}

fn init_contact_form(document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let Some(surface) = DomContactForm::locate(document, config)? else {
        return Ok(());
    };

    let form_el = surface.form().clone();
    let contact = Rc::new(RefCell::new(ContactForm::new(surface)));

    listen(&form_el, "submit", move |event| {
        event.prevent_default();
        contact.borrow_mut().submit();
    })
}
