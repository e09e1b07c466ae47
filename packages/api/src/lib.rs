//! # API crate — typed client for the registration backend
//!
//! The backend is an external HTTP service; this crate is the only place the
//! frontend talks to it. It defines the wire types and a small client with
//! one method per endpoint.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] — `register`, `login`, `list_donors` over HTTP (`gloo-net` on wasm, `reqwest` on native) |
//! | [`error`] | [`ApiError`] — server-reported vs. transport vs. decode failures |
//! | [`models`] | Payloads and records: [`RegistrationPayload`], [`LoginPayload`], [`DonorRecord`] |
//!
//! ## Endpoints
//!
//! - `POST /register` — body: [`RegistrationPayload`]; success: [`RegisterResponse`]
//! - `POST /login` — body: [`LoginPayload`]; success: `{ "user": ... }`
//! - `GET /api/donors` — success: array of [`DonorRecord`]
//!
//! Failures carry `{ "error": "..." }`, surfaced verbatim as
//! [`ApiError::Server`].

pub mod client;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    DonorKind, DonorRecord, LoginPayload, LoginResponse, RegisterResponse, RegistrationPayload,
};
pub use store::{Role, UserSession};
