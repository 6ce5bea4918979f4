//! Smooth scrolling for in-page anchor links

/// Selector matching the links whose clicks are intercepted
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Target of an in-page `#id` link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorTarget {
    id: String,
}

impl AnchorTarget {
    /// Parse an `href` attribute; only `#id` with a non-empty id is a target
    pub fn parse(href: &str) -> Option<Self> {
        let id = href.strip_prefix('#')?;
        if id.trim().is_empty() {
            return None;
        }
        Some(Self { id: id.to_string() })
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Vertical page offset that puts an element just below the fixed header
///
/// `element_top` is relative to the viewport, as reported by the bounding
/// client rect.
pub fn scroll_offset(element_top: f64, page_y_offset: f64, header_height: f64) -> f64 {
    element_top + page_y_offset - header_height
}
