//! Page-model document types and content-reference lookup.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Identifier of a single component within a page model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentId(String);

impl ComponentId {
    /// Create a new component ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the ID is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ComponentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ComponentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ComponentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A page-model document as returned by the content-management backend.
///
/// The document is mostly passthrough data: the `page` component tree and
/// the `content` entries keep whatever shape the backend produced, and any
/// other top-level fields survive a round trip via the flattened remainder.
/// Interpretation of the tree is left to the merge and lookup helpers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageModel {
    /// Root node of the component tree.
    pub page: Value,
    /// Referenced content entries, keyed by content ID.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub content: Map<String, Value>,
    /// Any remaining top-level fields, passed through untouched.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl PageModel {
    /// Create a page model from a component tree root.
    pub fn new(page: Value) -> Self {
        Self {
            page,
            content: Map::new(),
            rest: Map::new(),
        }
    }

    /// Decode a page model from a raw backend response.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Encode the page model back into a raw JSON document.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Resolve a content reference (e.g. `/content/u1234`) against this model.
    ///
    /// Returns `None` when the path does not lead to a value.
    pub fn resolve_reference(&self, reference: &str) -> Option<&Value> {
        let mut segments = reference.split('/').filter(|s| !s.is_empty());

        // The first segment selects a top-level section of the document.
        let first = segments.next()?;
        let mut current = match first {
            "page" => &self.page,
            "content" => {
                let key = segments.next()?;
                self.content.get(key)?
            }
            other => self.rest.get(other)?,
        };

        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => {
                    let index: usize = segment.parse().ok()?;
                    items.get(index)?
                }
                _ => return None,
            };
        }

        Some(current)
    }
}
