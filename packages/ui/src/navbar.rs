use dioxus::prelude::*;

use crate::icons::FaHeartPulse;
use crate::session::{use_session, LogoutButton};
use crate::Icon;

/// Top navigation bar with the session area on the right.
///
/// Shows a Login link while no session is cached; once a user is logged in it
/// shows a welcome message and the logout control instead. While the session
/// is still loading neither is rendered.
#[component]
pub fn Navbar(children: Element) -> Element {
    let session = use_session();
    let state = session();

    let session_area = if state.loading {
        rsx! {}
    } else if let Some(user) = state.user {
        rsx! {
            span { class: "navbar-welcome", "Welcome, {user.display_name()}" }
            LogoutButton { class: "btn btn-outline" }
        }
    } else {
        rsx! {
            a { class: "btn btn-primary", href: "/login", "Login" }
        }
    };

    rsx! {
        nav {
            class: "navbar",
            a {
                class: "navbar-brand",
                href: "/",
                Icon { icon: FaHeartPulse, width: 18, height: 18 }
                span { "LifeLink" }
            }
            div {
                class: "navbar-links",
                {children}
            }
            div {
                class: "navbar-session",
                {session_area}
            }
        }
    }
}
