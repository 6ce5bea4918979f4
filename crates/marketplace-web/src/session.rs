//! `sessionStorage` backed session store

use anyhow::{anyhow, Result};
use marketplace_page::SessionStore;
use web_sys::{Storage, Window};

use crate::dom::js_error;

pub struct DomSessionStore {
    storage: Option<Storage>,
}

impl DomSessionStore {
    /// Storage may be unavailable (privacy mode, sandboxed frames)
    pub fn new(window: &Window) -> Self {
        Self {
            storage: window.session_storage().ok().flatten(),
        }
    }
}

impl SessionStore for DomSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match &self.storage {
            Some(storage) => storage.get_item(key).map_err(js_error),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| anyhow!("session storage unavailable"))?;
        storage.set_item(key, value).map_err(js_error)
    }
}
