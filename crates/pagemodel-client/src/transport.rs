//! HTTP transport seam and the reqwest-backed implementation.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::TransportError;

/// Content type sent with component-update POSTs.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Outbound HTTP seam used by the page-model client.
///
/// Implementations must carry credentials (cookies) across requests; preview
/// access on the backend is session-bound.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a GET and decode the JSON response body.
    async fn get(&self, url: &str) -> Result<Value, TransportError>;

    /// POST a pre-encoded form body and decode the JSON response body.
    async fn post_form(&self, url: &str, body: &str) -> Result<Value, TransportError>;
}

/// `HttpTransport` backed by a shared `reqwest` client.
///
/// The client keeps a cookie store so backend sessions survive across
/// requests.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a cookie-keeping client.
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| TransportError::RequestError(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing `reqwest` client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn decode(response: reqwest::Response) -> Result<Value, TransportError> {
        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(TransportError::HttpError {
                status,
                url: response.url().to_string(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| TransportError::DecodeError(e.to_string()))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<Value, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::RequestError(e.to_string()))?;

        Self::decode(response).await
    }

    async fn post_form(&self, url: &str, body: &str) -> Result<Value, TransportError> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body.to_string())
            .send()
            .await
            .map_err(|e| TransportError::RequestError(e.to_string()))?;

        Self::decode(response).await
    }
}
