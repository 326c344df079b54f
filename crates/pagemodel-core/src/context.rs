//! Request context with typed parameters.

use serde::{Deserialize, Serialize};

/// Where the current rendering pass is running.
///
/// The mode is fixed at construction time by the embedding application; the
/// hand-off cache is only ever written during a server pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Server-side rendering pass.
    Server,
    /// Client-side rendering pass.
    Client,
}

impl RenderMode {
    /// Check if this is the server-side pass.
    pub fn is_server(&self) -> bool {
        matches!(self, Self::Server)
    }
}

/// Per-request state read by the page-model client at call time.
///
/// The embedding router replaces this snapshot on each navigation; the
/// client never derives any of these values itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// Whether the request targets unpublished/draft content.
    pub preview: bool,
    /// Whether verbose diagnostic logging is enabled.
    pub debugging: bool,
    /// Request path, without leading slash (e.g. "news/2019/launch").
    pub path: String,
    /// Raw query string, without the leading `?`.
    pub query: String,
    /// Whether the server-to-client hand-off cache may be used.
    pub transfer_state: bool,
}

impl RequestContext {
    /// Create a context for a request path, with all flags off.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            preview: false,
            debugging: false,
            path: path.into(),
            query: String::new(),
            transfer_state: false,
        }
    }

    /// Set the preview flag.
    pub fn with_preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }

    /// Set the debugging flag.
    pub fn with_debugging(mut self, debugging: bool) -> Self {
        self.debugging = debugging;
        self
    }

    /// Set the query string.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Enable or disable the hand-off cache.
    pub fn with_transfer_state(mut self, enabled: bool) -> Self {
        self.transfer_state = enabled;
        self
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new("")
    }
}
