//! Collapsible mobile navigation

/// Open/closed state of the mobile menu; hidden on page load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobileMenu {
    hidden: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self { hidden: true }
    }

    /// Start from the state the markup already shows
    pub fn with_hidden(hidden: bool) -> Self {
        Self { hidden }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Menu button click; returns the new hidden state
    pub fn toggle(&mut self) -> bool {
        self.hidden = !self.hidden;
        self.hidden
    }

    /// Hide the menu if open; returns true when the state changed
    pub fn close(&mut self) -> bool {
        if self.hidden {
            return false;
        }
        self.hidden = true;
        true
    }
}

impl Default for MobileMenu {
    fn default() -> Self {
        Self::new()
    }
}
