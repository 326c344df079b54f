//! Server-to-client hand-off cache.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Fixed key under which a server pass hands the page model to the client
/// pass. A value stored here is consumed (read then removed) exactly once.
pub const TRANSFER_KEY: &str = "pagemodel";

/// Hand-off store for passing values from a server-rendering pass to the
/// subsequent client-rendering pass without a repeated network fetch.
pub trait TransferCache: Send + Sync {
    /// Check whether a key holds a value.
    fn has_key(&self, key: &str) -> bool;

    /// Get the value for a key, or the provided default.
    fn get(&self, key: &str, default: Value) -> Value;

    /// Store a value under a key.
    fn set(&self, key: &str, value: Value);

    /// Remove a key.
    fn remove(&self, key: &str);
}

/// In-memory `TransferCache` for embedders without a platform-provided one.
#[derive(Default)]
pub struct InMemoryTransferCache {
    entries: Mutex<HashMap<String, Value>>,
}

impl InMemoryTransferCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransferCache for InMemoryTransferCache {
    fn has_key(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    fn get(&self, key: &str, default: Value) -> Value {
        self.entries
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .unwrap_or(default)
    }

    fn set(&self, key: &str, value: Value) {
        self.entries.lock().unwrap().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}
