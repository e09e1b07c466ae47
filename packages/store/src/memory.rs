use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::SessionStore;

/// In-memory SessionStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("user").is_none());

        store.set("user", "{}");
        assert_eq!(store.get("user").as_deref(), Some("{}"));

        store.set("user", r#"{"name":"a"}"#);
        assert_eq!(store.get("user").as_deref(), Some(r#"{"name":"a"}"#));

        store.remove("user");
        assert!(store.get("user").is_none());
    }

    #[test]
    fn clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("role", "donor");
        assert_eq!(other.get("role").as_deref(), Some("donor"));
    }
}
