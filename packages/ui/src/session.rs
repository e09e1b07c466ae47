//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::{SessionContext, UserSession};

/// Session state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<UserSession>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Create a platform-appropriate session context.
///
/// - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStore`]
/// - **Native** (tests, tooling): an in-memory map via [`store::MemoryStore`]
pub fn make_session() -> SessionContext<impl store::SessionStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionContext::new(store::LocalStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        SessionContext::new(store::MemoryStore::new())
    }
}

/// Provider component that loads the persisted session once on mount.
/// Wrap your app with this component to enable the session hooks.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut session_state = use_signal(SessionState::default);

    use_effect(move || {
        let user = make_session().load();
        session_state.set(SessionState {
            user,
            loading: false,
        });
    });

    use_context_provider(|| session_state);

    rsx! {
        {children}
    }
}

/// Button that logs out the current user: clears both storage keys, confirms,
/// and returns to the home page.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session_state = use_session();

    let onclick = move |_| {
        make_session().clear();
        session_state.set(SessionState {
            user: None,
            loading: false,
        });
        tracing::info!("user logged out");
        crate::alert("Logged out successfully.");

        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
