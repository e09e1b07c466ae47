//! # Browser `localStorage` backend — web-side persistence
//!
//! [`LocalStore`] is the [`SessionStore`] implementation used on the **web
//! platform**. It reads and writes `window.localStorage` via `web-sys`, which
//! is where the login page has always cached the signed-in user, so existing
//! sessions keep working across deploys.
//!
//! The values are plaintext and readable by any script on the page; the
//! session is a display cache, never an authority.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads,
//! doing nothing for writes). A browser with storage disabled degrades to
//! "never logged in" rather than crashing the page.

use crate::session::SessionStore;

/// `localStorage`-backed SessionStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
