//! # Request and response payloads
//!
//! [`RegistrationPayload`] is a tagged-variant form model: each role carries
//! exactly its own required fields, and serde's `role` tag produces the flat
//! JSON object the backend's single `/register` endpoint expects. There is no
//! way to construct a hospital registration with donor-only fields.
//!
//! [`validate`](RegistrationPayload::validate) checks the variant's required
//! fields before submission so the user gets one clear message instead of a
//! backend round trip.

use serde::{Deserialize, Serialize};
use store::{Role, UserSession};

/// Body of `POST /register`, tagged by role.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RegistrationPayload {
    Donor {
        fullname: String,
        phone: String,
        email: String,
        password: String,
        aadhar: String,
        weight: String,
        dob: String,
    },
    Hospital {
        fullname: String,
        phone: String,
        email: String,
        password: String,
    },
}

impl RegistrationPayload {
    /// The role this payload registers.
    pub fn role(&self) -> Role {
        match self {
            RegistrationPayload::Donor { .. } => Role::Donor,
            RegistrationPayload::Hospital { .. } => Role::Hospital,
        }
    }

    /// Check the variant's required fields. Returns the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            RegistrationPayload::Donor {
                fullname,
                phone,
                email,
                password,
                aadhar,
                weight,
                dob,
            } => {
                require(fullname, "Full name is required")?;
                require(phone, "Mobile number is required")?;
                require(email, "Email address is required")?;
                require(password, "Password is required")?;
                require(aadhar, "Aadhar number is required")?;
                require(weight, "Weight is required")?;
                require(dob, "Date of birth is required")?;
            }
            RegistrationPayload::Hospital {
                fullname,
                phone,
                email,
                password,
            } => {
                require(fullname, "Hospital name is required")?;
                require(phone, "Contact number is required")?;
                require(email, "Email address is required")?;
                require(password, "Password is required")?;
            }
        }
        Ok(())
    }
}

fn require(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(message.to_string());
    }
    Ok(())
}

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginPayload {
    pub role: Role,
    pub identifier: String,
    pub password: String,
}

/// Success body of `POST /register`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSession>,
}

/// Success body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserSession,
}
