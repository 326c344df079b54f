//! Merging component-rendering responses into a page model.

use serde_json::Value;

use crate::channel::ChannelManagerApi;
use crate::model::{ComponentId, PageModel};

/// Merge a component-rendering response into the current model.
///
/// The node whose `id` matches `component_id` is located anywhere in the
/// `page` tree (recursing through `components` arrays) and replaced with the
/// response's `page` node; the response's content entries are unioned into
/// the model's content map, with the response winning on collisions. When
/// the id is not present the current model is returned unchanged.
pub fn merge_component(
    response: &PageModel,
    component_id: &ComponentId,
    current: &PageModel,
    channel_manager: Option<&dyn ChannelManagerApi>,
    preview: bool,
    debugging: bool,
) -> PageModel {
    let mut merged = current.clone();

    if !replace_component(&mut merged.page, component_id.as_str(), &response.page) {
        tracing::debug!(
            component = %component_id,
            "component not found in page tree, model left unchanged"
        );
        return current.clone();
    }

    for (key, value) in &response.content {
        merged.content.insert(key.clone(), value.clone());
    }

    if debugging {
        tracing::debug!(component = %component_id, "merged component response into page model");
    }

    if preview {
        if let Some(api) = channel_manager {
            api.sync();
        }
    }

    merged
}

/// Depth-first search for the component with the given id; replaces the
/// whole subtree on a match.
fn replace_component(node: &mut Value, id: &str, replacement: &Value) -> bool {
    if node.get("id").and_then(Value::as_str) == Some(id) {
        *node = replacement.clone();
        return true;
    }

    if let Some(children) = node.get_mut("components").and_then(|c| c.as_array_mut()) {
        for child in children {
            if replace_component(child, id, replacement) {
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn current_model() -> PageModel {
        PageModel::from_value(json!({
            "page": {
                "id": "root",
                "components": [
                    { "id": "header", "label": "Header" },
                    {
                        "id": "main",
                        "components": [
                            { "id": "banner", "label": "Old Banner" }
                        ]
                    }
                ]
            },
            "content": {
                "u1": { "title": "Existing" }
            }
        }))
        .unwrap()
    }

    fn response_model() -> PageModel {
        PageModel::from_value(json!({
            "page": { "id": "banner", "label": "New Banner" },
            "content": {
                "u2": { "title": "Fresh" }
            }
        }))
        .unwrap()
    }

    // === Merge Tests ===

    #[test]
    fn test_nested_component_replaced() {
        let merged = merge_component(
            &response_model(),
            &ComponentId::new("banner"),
            &current_model(),
            None,
            false,
            false,
        );

        let resolved = merged
            .resolve_reference("/page/components/1/components/0/label")
            .unwrap();
        assert_eq!(resolved, &json!("New Banner"));
    }

    #[test]
    fn test_response_content_unioned() {
        let merged = merge_component(
            &response_model(),
            &ComponentId::new("banner"),
            &current_model(),
            None,
            false,
            false,
        );

        assert!(merged.content.contains_key("u1"));
        assert!(merged.content.contains_key("u2"));
    }

    #[test]
    fn test_response_wins_on_content_collision() {
        let response = PageModel::from_value(json!({
            "page": { "id": "banner" },
            "content": { "u1": { "title": "Replaced" } }
        }))
        .unwrap();

        let merged = merge_component(
            &response,
            &ComponentId::new("banner"),
            &current_model(),
            None,
            false,
            false,
        );

        assert_eq!(merged.content["u1"]["title"], json!("Replaced"));
    }

    #[test]
    fn test_unknown_id_leaves_model_unchanged() {
        let current = current_model();
        let merged = merge_component(
            &response_model(),
            &ComponentId::new("missing"),
            &current,
            None,
            false,
            false,
        );

        assert_eq!(merged, current);
        assert!(!merged.content.contains_key("u2"));
    }

    #[test]
    fn test_root_component_replaced() {
        let response = PageModel::new(json!({ "id": "root", "label": "Fresh Root" }));
        let merged = merge_component(
            &response,
            &ComponentId::new("root"),
            &current_model(),
            None,
            false,
            false,
        );

        assert_eq!(merged.page["label"], json!("Fresh Root"));
    }
}
