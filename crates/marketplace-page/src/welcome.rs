//! Welcome overlay with one-time name capture
//!
//! The visitor's name is kept in session storage. A returning visitor (same
//! session) is greeted straight away; a first visit shows the overlay after a
//! short delay and waits for the name form.

use anyhow::Result;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::WelcomeConfig;

/// Session-scoped key/value storage
pub trait SessionStore {
    /// Get a stored value by key
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory session store
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// How the overlay starts on page load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WelcomeStart {
    /// Name already captured this session: show the greeting, skip the overlay
    Returning { greeting: String },
    /// Reveal the welcome box after the delay and wait for the name form
    FirstVisit { reveal_after: Duration },
}

/// Hero greeting for a visitor name
pub fn greeting(name: &str) -> String {
    format!("Hi {}, Welcome to Your Digital Marketplace", name)
}

#[derive(Debug, Clone, Default)]
pub struct WelcomeOverlay {
    config: WelcomeConfig,
}

impl WelcomeOverlay {
    pub fn new(config: WelcomeConfig) -> Self {
        Self { config }
    }

    /// Decide the initial overlay state from the session flag
    ///
    /// An unreadable store is treated as a first visit.
    pub fn on_load(&self, store: &impl SessionStore) -> WelcomeStart {
        let stored = match store.get(&self.config.session_key) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "failed to read session name");
                None
            }
        };

        match stored.filter(|name| !name.is_empty()) {
            Some(name) => {
                debug!("returning visitor, skipping welcome overlay");
                WelcomeStart::Returning {
                    greeting: greeting(&name),
                }
            }
            None => WelcomeStart::FirstVisit {
                reveal_after: self.config.reveal_delay(),
            },
        }
    }

    /// Resolve the submitted name: trimmed, or the fallback when empty
    pub fn resolve_name(&self, raw: &str) -> String {
        let name = raw.trim();
        if name.is_empty() {
            self.config.fallback_name.clone()
        } else {
            name.to_string()
        }
    }

    /// Name form submission; stores the name and returns the greeting
    ///
    /// A failed write is logged; the visitor is greeted regardless.
    pub fn submit_name(&self, store: &mut impl SessionStore, raw: &str) -> String {
        let name = self.resolve_name(raw);

        if let Err(e) = store.set(&self.config.session_key, &name) {
            warn!(error = %e, "failed to store session name");
        }

        greeting(&name)
    }
}
