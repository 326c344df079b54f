//! Transport error types.

use thiserror::Error;

/// Errors that can occur when talking to the page-model API.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// HTTP error response.
    #[error("HTTP {status} for {url}")]
    HttpError { status: u16, url: String },

    /// Failed to decode the response body.
    #[error("Failed to decode response: {0}")]
    DecodeError(String),
}

impl From<serde_json::Error> for TransportError {
    fn from(e: serde_json::Error) -> Self {
        TransportError::DecodeError(e.to_string())
    }
}
