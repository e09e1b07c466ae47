//! # Session-side domain models
//!
//! Defines the two types the frontend persists and passes around for the
//! logged-in user:
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Role`] | The account discriminator (`"donor"` or `"hospital"`). Drives which form fields and labels are shown and is stored next to the session record under its own key. |
//! | [`UserSession`] | The client-cached copy of the authenticated user's display identity, exactly as returned by the login endpoint. It is a display cache only — nothing here is validated or trusted server-side. |
//!
//! Every field of [`UserSession`] is optional because the backend's user
//! object has grown over time and older records omit newer fields. The helper
//! [`UserSession::display_name`] returns the full name, falling back to the
//! short name and then the email address.

use serde::{Deserialize, Serialize};

/// Account role: a donor registering themselves, or a hospital.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Donor,
    Hospital,
}

impl Role {
    /// Wire-format string, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Donor => "donor",
            Role::Hospital => "hospital",
        }
    }

    /// Capitalized form used in user-facing messages.
    pub fn title(&self) -> &'static str {
        match self {
            Role::Donor => "Donor",
            Role::Hospital => "Hospital",
        }
    }

    /// Parse the wire-format string. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "donor" => Some(Role::Donor),
            "hospital" => Some(Role::Hospital),
            _ => None,
        }
    }
}

/// The user record cached in browser storage after a successful login.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    /// Backend document id, when the backend includes it.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl UserSession {
    /// Display name for the welcome message: `fullname`, falling back to
    /// `name`, then `email`.
    pub fn display_name(&self) -> &str {
        self.fullname
            .as_deref()
            .or(self.name.as_deref())
            .or(self.email.as_deref())
            .unwrap_or("")
    }
}
