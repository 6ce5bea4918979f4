// Marketplace Page
// Page behaviors as plain state and math, independent of the DOM

pub mod config;
pub mod menu;
pub mod scroll;
pub mod welcome;

pub use config::{ClassNames, ElementIds, PageConfig, WelcomeConfig};
pub use menu::MobileMenu;
pub use scroll::{scroll_offset, AnchorTarget, ANCHOR_SELECTOR};
pub use welcome::{greeting, MemorySessionStore, SessionStore, WelcomeOverlay, WelcomeStart};

// Re-export the form validator so adapters need a single dependency
pub use marketplace_forms as forms;
