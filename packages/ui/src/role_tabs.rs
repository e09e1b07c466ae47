//! # Role tab switcher
//!
//! The registration and login forms share a pair of tabs that pick the
//! account role. The selected [`Role`] lives in a signal owned by the form;
//! every role-dependent label, placeholder and field group derives from that
//! one value, so toggling tabs is idempotent by construction.
//!
//! The label helpers keep the wording differences in one place:
//! donors see "Email Address" and "Mobile Number", hospitals see
//! "Hospital ID" and "Contact Number".

use dioxus::prelude::*;
use store::Role;

/// Label for the name field.
pub fn name_label(role: Role) -> &'static str {
    match role {
        Role::Donor => "Full Name",
        Role::Hospital => "Hospital Name",
    }
}

/// Placeholder for the name field.
pub fn name_placeholder(role: Role) -> &'static str {
    match role {
        Role::Donor => "Enter your full name",
        Role::Hospital => "Enter hospital name",
    }
}

/// Label for the login identifier field.
pub fn identifier_label(role: Role) -> &'static str {
    match role {
        Role::Donor => "Email Address",
        Role::Hospital => "Hospital ID",
    }
}

/// Placeholder for the login identifier field.
pub fn identifier_placeholder(role: Role) -> &'static str {
    match role {
        Role::Donor => "Enter your email",
        Role::Hospital => "Enter your hospital ID",
    }
}

/// Label for the phone field.
pub fn phone_label(role: Role) -> &'static str {
    match role {
        Role::Donor => "Mobile Number",
        Role::Hospital => "Contact Number",
    }
}

/// Placeholder for the phone field.
pub fn phone_placeholder(role: Role) -> &'static str {
    match role {
        Role::Donor => "Enter your mobile number",
        Role::Hospital => "Enter contact number",
    }
}

/// Donor/Hospital tab pair bound to the form's role signal.
#[component]
pub fn RoleTabs(mut role: Signal<Role>) -> Element {
    rsx! {
        div {
            class: "role-tabs",
            for tab in [Role::Donor, Role::Hospital] {
                button {
                    r#type: "button",
                    class: if role() == tab { "tab-btn active" } else { "tab-btn" },
                    onclick: move |_| {
                        role.set(tab);
                        tracing::debug!("switched to {} tab", tab.as_str());
                    },
                    "{tab.title()}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_swap_with_role() {
        assert_eq!(name_label(Role::Donor), "Full Name");
        assert_eq!(name_label(Role::Hospital), "Hospital Name");
        assert_eq!(identifier_label(Role::Donor), "Email Address");
        assert_eq!(identifier_label(Role::Hospital), "Hospital ID");
        assert_eq!(phone_label(Role::Donor), "Mobile Number");
        assert_eq!(phone_label(Role::Hospital), "Contact Number");
    }

    #[test]
    fn toggling_back_restores_donor_labels() {
        // Labels are pure functions of the role, so switching to hospital and
        // back yields the original wording no matter how often it happens.
        let before = (
            name_label(Role::Donor),
            identifier_label(Role::Donor),
            phone_label(Role::Donor),
        );
        for _ in 0..3 {
            let _ = (
                name_label(Role::Hospital),
                identifier_label(Role::Hospital),
                phone_label(Role::Hospital),
            );
        }
        let after = (
            name_label(Role::Donor),
            identifier_label(Role::Donor),
            phone_label(Role::Donor),
        );
        assert_eq!(before, after);
    }
}
