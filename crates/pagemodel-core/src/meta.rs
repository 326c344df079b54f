//! Page metadata post-processing.

use serde_json::{Map, Value};

use crate::channel::ChannelManagerApi;

/// Post-process the page node after a fetch or update.
///
/// Ensures the node carries a `_meta` object so downstream consumers can
/// rely on its presence, and asks the editor tooling to re-sync its overlays
/// when running against preview content. Mutates the node in place.
pub fn update_page_meta_data(
    page: &mut Value,
    channel_manager: Option<&dyn ChannelManagerApi>,
    preview: bool,
    debugging: bool,
) {
    if let Some(node) = page.as_object_mut() {
        let meta = node
            .entry("_meta")
            .or_insert_with(|| Value::Object(Map::new()));

        if debugging {
            tracing::debug!(meta = %meta, preview, "page metadata");
        }
    }

    if preview {
        if let Some(api) = channel_manager {
            api.sync();
        }
    }
}
