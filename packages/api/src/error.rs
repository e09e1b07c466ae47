//! Error taxonomy for backend calls.

use thiserror::Error;

/// What went wrong talking to the backend.
///
/// The distinction matters to the UI: a [`Server`](ApiError::Server) message
/// is shown to the user verbatim, while transport and decode failures are
/// collapsed into a generic connection alert and logged.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response with a server-provided message.
    #[error("{0}")]
    Server(String),
    /// The request never completed (DNS, refused connection, CORS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The response body was not the JSON we expected.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True for errors the server reported about the request itself.
    pub fn is_server(&self) -> bool {
        matches!(self, ApiError::Server(_))
    }
}
