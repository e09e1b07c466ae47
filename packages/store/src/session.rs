//! # Session persistence — an explicit context over browser storage
//!
//! The login flow caches the authenticated user's display identity on the
//! client. Historically that cache was ambient (`localStorage` read from
//! anywhere); here all access goes through [`SessionContext`], which owns the
//! serialization schema and the two well-known keys:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`USER_KEY`] (`"user"`) | The [`UserSession`] record as JSON |
//! | [`ROLE_KEY`] (`"role"`) | The role as a plain string (`"donor"` / `"hospital"`) |
//!
//! Reads and writes go through the [`SessionStore`] trait so the same logic
//! works against browser `localStorage` ([`crate::LocalStore`], web builds)
//! and an in-memory map ([`crate::MemoryStore`], tests and native builds).
//!
//! ## Error handling
//!
//! Storage that is missing, unreadable, or holds malformed JSON degrades to
//! "no session" — absence of a session is the default, silent state, never an
//! error. Writes to unavailable storage are dropped.

use crate::models::{Role, UserSession};

/// Storage key holding the serialized [`UserSession`].
pub const USER_KEY: &str = "user";
/// Storage key holding the plain role string.
pub const ROLE_KEY: &str = "role";

/// String key-value storage for the session cache.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Explicit session object with load/save/clear operations.
pub struct SessionContext<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> SessionContext<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the persisted session, if any.
    ///
    /// A missing or unparseable `"user"` record yields `None`. When the user
    /// record predates the embedded role field, the standalone `"role"` key
    /// fills it in.
    pub fn load(&self) -> Option<UserSession> {
        let raw = self.store.get(USER_KEY)?;
        let mut user: UserSession = serde_json::from_str(&raw).ok()?;
        if user.role.is_none() {
            user.role = self.store.get(ROLE_KEY).and_then(|r| Role::parse(&r));
        }
        Some(user)
    }

    /// Persist a session under both keys.
    pub fn save(&self, user: &UserSession) {
        if let Ok(json) = serde_json::to_string(user) {
            self.store.set(USER_KEY, &json);
        }
        match user.role {
            Some(role) => self.store.set(ROLE_KEY, role.as_str()),
            None => self.store.remove(ROLE_KEY),
        }
    }

    /// Delete both keys. Used on logout.
    pub fn clear(&self) {
        self.store.remove(USER_KEY);
        self.store.remove(ROLE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn donor() -> UserSession {
        UserSession {
            fullname: Some("Asha Rao".to_string()),
            email: Some("asha@example.com".to_string()),
            role: Some(Role::Donor),
            ..Default::default()
        }
    }

    #[test]
    fn absent_session_loads_as_none() {
        let session = SessionContext::new(MemoryStore::new());
        assert!(session.load().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryStore::new();
        let session = SessionContext::new(store.clone());

        session.save(&donor());

        let loaded = session.load().unwrap();
        assert_eq!(loaded.display_name(), "Asha Rao");
        assert_eq!(loaded.role, Some(Role::Donor));

        // Both keys are written; the role key is a plain string, not JSON.
        assert_eq!(store.get(ROLE_KEY).as_deref(), Some("donor"));
        assert!(store.get(USER_KEY).unwrap().starts_with('{'));
    }

    #[test]
    fn clear_removes_both_keys() {
        let store = MemoryStore::new();
        let session = SessionContext::new(store.clone());

        session.save(&donor());
        session.clear();

        assert!(session.load().is_none());
        assert!(store.get(USER_KEY).is_none());
        assert!(store.get(ROLE_KEY).is_none());
    }

    #[test]
    fn legacy_role_key_fills_missing_role() {
        let store = MemoryStore::new();
        store.set(USER_KEY, r#"{"fullname":"City Hospital"}"#);
        store.set(ROLE_KEY, "hospital");

        let session = SessionContext::new(store);
        let loaded = session.load().unwrap();
        assert_eq!(loaded.role, Some(Role::Hospital));
    }

    #[test]
    fn malformed_user_record_is_ignored() {
        let store = MemoryStore::new();
        store.set(USER_KEY, "not json");

        let session = SessionContext::new(store);
        assert!(session.load().is_none());
    }
}
