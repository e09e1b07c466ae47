//! # HTTP client for the registration backend
//!
//! [`ApiClient`] wraps the three backend endpoints. Transport is platform
//! dependent (`gloo-net` in the browser, `reqwest` on native), so each
//! request funnels into a small platform helper that returns the success flag
//! and raw body, and the shared [`decode_response`] turns that into a typed
//! result:
//!
//! - 2xx → parse the expected body, [`ApiError::Decode`] if it doesn't parse
//! - non-2xx → parse `{ "error": ... }` and surface it verbatim as
//!   [`ApiError::Server`], falling back to `"Unknown error"`
//! - transport failure → [`ApiError::Network`], logged via `tracing`
//!
//! Requests are fire-and-forget from the caller's point of view: no retries,
//! no timeouts, no cancellation of in-flight calls. A submit handler awaits
//! its own request and nothing else.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::{DonorRecord, LoginPayload, LoginResponse, RegisterResponse, RegistrationPayload};
use store::{AppConfig, UserSession};

/// Wire shape of a backend failure body.
#[derive(serde::Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Client for the registration backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `POST /register` with a role-tagged registration payload.
    pub async fn register(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<RegisterResponse, ApiError> {
        let (ok, body) = post_json(&self.url("/register"), payload).await?;
        decode_response(ok, &body)
    }

    /// `POST /login`; returns the user object the backend hands back.
    pub async fn login(&self, payload: &LoginPayload) -> Result<UserSession, ApiError> {
        let (ok, body) = post_json(&self.url("/login"), payload).await?;
        let response: LoginResponse = decode_response(ok, &body)?;
        Ok(response.user)
    }

    /// `GET /api/donors`; the full donor collection, unpaginated.
    pub async fn list_donors(&self) -> Result<Vec<DonorRecord>, ApiError> {
        let (ok, body) = get(&self.url("/api/donors")).await?;
        decode_response(ok, &body)
    }
}

/// Turn a raw response into a typed result per the error taxonomy.
fn decode_response<T: DeserializeOwned>(ok: bool, body: &str) -> Result<T, ApiError> {
    if ok {
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(response) => Err(ApiError::Server(response.error)),
            Err(_) => Err(ApiError::Server("Unknown error".to_string())),
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<(bool, String), ApiError> {
    let response = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| network_error(url, e))?;
    let ok = response.ok();
    let text = response
        .text()
        .await
        .map_err(|e| network_error(url, e))?;
    Ok((ok, text))
}

#[cfg(target_arch = "wasm32")]
async fn get(url: &str) -> Result<(bool, String), ApiError> {
    let response = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| network_error(url, e))?;
    let ok = response.ok();
    let text = response
        .text()
        .await
        .map_err(|e| network_error(url, e))?;
    Ok((ok, text))
}

#[cfg(not(target_arch = "wasm32"))]
async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<(bool, String), ApiError> {
    let response = reqwest::Client::new()
        .post(url)
        .json(body)
        .send()
        .await
        .map_err(|e| network_error(url, e))?;
    let ok = response.status().is_success();
    let text = response.text().await.map_err(|e| network_error(url, e))?;
    Ok((ok, text))
}

#[cfg(not(target_arch = "wasm32"))]
async fn get(url: &str) -> Result<(bool, String), ApiError> {
    let response = reqwest::Client::new()
        .get(url)
        .send()
        .await
        .map_err(|e| network_error(url, e))?;
    let ok = response.status().is_success();
    let text = response.text().await.map_err(|e| network_error(url, e))?;
    Ok((ok, text))
}

fn network_error(url: &str, err: impl std::fmt::Display) -> ApiError {
    tracing::error!("request to {url} failed: {err}");
    ApiError::Network(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Role;

    #[test]
    fn base_url_loses_trailing_slash() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url("/register"), "http://localhost:5000/register");
    }

    #[test]
    fn default_client_uses_configured_backend() {
        let client = ApiClient::default();
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn success_body_decodes_login_user() {
        let body = r#"{"user":{"fullname":"Asha Rao","role":"donor"}}"#;
        let response: LoginResponse = decode_response(true, body).unwrap();
        assert_eq!(response.user.display_name(), "Asha Rao");
        assert_eq!(response.user.role, Some(Role::Donor));
    }

    #[test]
    fn failure_body_surfaces_server_message_verbatim() {
        let err =
            decode_response::<LoginResponse>(false, r#"{"error":"Invalid credentials"}"#)
                .unwrap_err();
        match err {
            ApiError::Server(message) => assert_eq!(message, "Invalid credentials"),
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[test]
    fn failure_without_error_field_falls_back_to_generic() {
        let err = decode_response::<RegisterResponse>(false, "<html>502</html>").unwrap_err();
        match err {
            ApiError::Server(message) => assert_eq!(message, "Unknown error"),
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[test]
    fn garbled_success_body_is_a_decode_error() {
        let err = decode_response::<LoginResponse>(true, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(!err.is_server());
    }

    #[test]
    fn donor_collection_decodes_including_empty() {
        let donors: Vec<DonorRecord> = decode_response(true, "[]").unwrap();
        assert!(donors.is_empty());

        let donors: Vec<DonorRecord> = decode_response(
            true,
            r#"[{"fullname":"Asha Rao","phone":"9876543210","donor_type":"blood"}]"#,
        )
        .unwrap();
        assert_eq!(donors.len(), 1);
        assert!(donors[0].in_blood_list());
        assert!(!donors[0].in_organ_list());
    }
}
