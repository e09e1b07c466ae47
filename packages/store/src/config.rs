//! # Application configuration — `lifelink.toml`
//!
//! Defines the TOML configuration for the frontend. Its single job today is
//! to hold the backend base URL in one place instead of at every call site.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000"
//! ```
//!
//! All structs derive `Default` with the local development backend as the
//! default, so a missing or empty config file is equivalent to the default
//! configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `lifelink.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend API configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the registration backend, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "lifelink.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
