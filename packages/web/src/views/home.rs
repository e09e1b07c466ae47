//! Landing page with the hero section and animated statistics.

use dioxus::prelude::*;
use ui::{Navbar, StatCounter};

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        Navbar {
            Link { class: "nav-link", to: Route::Home {}, "Home" }
            Link { class: "nav-link", to: Route::Donors {}, "Find Donors" }
            Link { class: "nav-link", to: Route::Register {}, "Register" }
        }

        section {
            class: "hero",
            h1 { "Give the gift of life" }
            p {
                class: "hero-tagline",
                "Register as a blood or organ donor and help hospitals find you when it matters most."
            }
            div {
                class: "hero-actions",
                Link { class: "btn btn-primary", to: Route::Register {}, "Become a Donor" }
                Link { class: "btn btn-outline", to: Route::Donors {}, "Find Donors" }
            }
        }

        section {
            class: "stats",
            div {
                class: "stat",
                StatCounter { stat: "donors" }
                span { class: "stat-label", "Registered donors" }
            }
            div {
                class: "stat",
                StatCounter { stat: "hospitals" }
                span { class: "stat-label", "Partner hospitals" }
            }
            div {
                class: "stat",
                StatCounter { stat: "saved" }
                span { class: "stat-label", "Lives saved" }
            }
        }
    }
}
