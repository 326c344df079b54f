//! API endpoint configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a single page-model API endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// URL scheme (e.g. "https").
    #[serde(default = "default_scheme")]
    pub scheme: String,
    /// Backend hostname.
    pub hostname: String,
    /// Backend port; omitted from URLs when `None`.
    #[serde(default)]
    pub port: Option<u16>,
    /// Servlet/context path segment (e.g. "site").
    #[serde(default)]
    pub context_path: String,
    /// Channel path segment for multi-channel setups.
    #[serde(default)]
    pub channel_path: String,
    /// Prefix inserted before the channel path on preview requests.
    #[serde(default = "default_preview_prefix")]
    pub preview_prefix: String,
    /// Path segment of the page-model API itself.
    #[serde(default = "default_api_path")]
    pub api_path: String,
    /// Query suffix selecting component rendering, without the component ref.
    #[serde(default = "default_component_rendering_suffix")]
    pub component_rendering_suffix: String,
}

fn default_scheme() -> String {
    "https".to_string()
}

fn default_preview_prefix() -> String {
    "_cmsinternal".to_string()
}

fn default_api_path() -> String {
    "resourceapi".to_string()
}

fn default_component_rendering_suffix() -> String {
    "?_hn:type=component-rendering&_hn:ref=".to_string()
}

impl EndpointConfig {
    /// Create an endpoint configuration for a hostname.
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            scheme: default_scheme(),
            hostname: hostname.into(),
            port: None,
            context_path: String::new(),
            channel_path: String::new(),
            preview_prefix: default_preview_prefix(),
            api_path: default_api_path(),
            component_rendering_suffix: default_component_rendering_suffix(),
        }
    }

    /// Set the URL scheme.
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Set the backend port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the context path.
    pub fn with_context_path(mut self, path: impl Into<String>) -> Self {
        self.context_path = path.into();
        self
    }

    /// Set the channel path.
    pub fn with_channel_path(mut self, path: impl Into<String>) -> Self {
        self.channel_path = path.into();
        self
    }

    /// Set the preview prefix.
    pub fn with_preview_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.preview_prefix = prefix.into();
        self
    }

    /// Set the page-model API path.
    pub fn with_api_path(mut self, path: impl Into<String>) -> Self {
        self.api_path = path.into();
        self
    }

    /// Scheme, hostname and optional port joined into an origin.
    pub fn origin(&self) -> String {
        match self.port {
            Some(port) => format!("{}://{}:{}", self.scheme, self.hostname, port),
            None => format!("{}://{}", self.scheme, self.hostname),
        }
    }
}

/// The live/preview endpoint pair consumed by the URL builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiUrls {
    /// Endpoint serving published content.
    pub live: EndpointConfig,
    /// Endpoint serving draft content.
    pub preview: EndpointConfig,
}

impl ApiUrls {
    /// Create a pair where live and preview share one endpoint.
    pub fn single(endpoint: EndpointConfig) -> Self {
        Self {
            live: endpoint.clone(),
            preview: endpoint,
        }
    }

    /// Create a pair from distinct live and preview endpoints.
    pub fn new(live: EndpointConfig, preview: EndpointConfig) -> Self {
        Self { live, preview }
    }

    /// Select the endpoint for the given preview flag.
    pub fn endpoint(&self, preview: bool) -> &EndpointConfig {
        if preview {
            &self.preview
        } else {
            &self.live
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_defaults() {
        let endpoint = EndpointConfig::new("cms.example.com");
        assert_eq!(endpoint.scheme, "https");
        assert_eq!(endpoint.api_path, "resourceapi");
        assert_eq!(endpoint.preview_prefix, "_cmsinternal");
        assert!(endpoint.port.is_none());
    }

    #[test]
    fn test_origin_with_port() {
        let endpoint = EndpointConfig::new("localhost")
            .with_scheme("http")
            .with_port(8080);
        assert_eq!(endpoint.origin(), "http://localhost:8080");
    }

    #[test]
    fn test_origin_without_port() {
        let endpoint = EndpointConfig::new("cms.example.com");
        assert_eq!(endpoint.origin(), "https://cms.example.com");
    }

    #[test]
    fn test_endpoint_selection() {
        let urls = ApiUrls::new(
            EndpointConfig::new("live.example.com"),
            EndpointConfig::new("preview.example.com"),
        );
        assert_eq!(urls.endpoint(false).hostname, "live.example.com");
        assert_eq!(urls.endpoint(true).hostname, "preview.example.com");
    }

    #[test]
    fn test_single_endpoint_pair() {
        let urls = ApiUrls::single(EndpointConfig::new("cms.example.com"));
        assert_eq!(urls.live.hostname, urls.preview.hostname);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let endpoint: EndpointConfig =
            serde_json::from_str(r#"{ "hostname": "cms.example.com" }"#).unwrap();
        assert_eq!(endpoint.scheme, "https");
        assert_eq!(endpoint.api_path, "resourceapi");
    }
}
