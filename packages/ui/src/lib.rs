//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{make_session, use_session, LogoutButton, SessionProvider, SessionState};

mod navbar;
pub use navbar::Navbar;

mod dialog;
pub use dialog::alert;

mod stat_counter;
pub use stat_counter::{counter_value, format_count, stat_target, StatCounter, COUNTER_DURATION_MS};

mod role_tabs;
pub use role_tabs::{
    identifier_label, identifier_placeholder, name_label, name_placeholder, phone_label,
    phone_placeholder, RoleTabs,
};

mod donor_search;
pub use donor_search::{donor_matches, DonorSearch};

mod donor_card;
pub use donor_card::DonorCard;
