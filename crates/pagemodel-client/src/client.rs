//! The page-model client gateway.

use std::sync::{Arc, RwLock};

use pagemodel_core::{
    build_component_url, build_page_url, merge_component, to_form_encoded, update_page_meta_data,
    ApiUrls, ChannelManagerApi, ComponentId, ComponentUpdatePayload, PageModel, RenderMode,
    RequestContext,
};
use serde_json::Value;

use crate::error::TransportError;
use crate::subject::{ModelPublisher, ModelSubscription};
use crate::transfer::{TransferCache, TRANSFER_KEY};
use crate::transport::HttpTransport;

/// Gateway that owns the current page model, mediates all reads and writes
/// of it against the backend, and broadcasts updates.
///
/// Constructed once per embedding application with its collaborators passed
/// in explicitly. Overlapping `fetch_page_model` / `update_component` calls
/// are not serialized: whichever response lands last becomes the current
/// model.
pub struct PageModelClient {
    api_urls: ApiUrls,
    render_mode: RenderMode,
    transport: Arc<dyn HttpTransport>,
    transfer_cache: Option<Arc<dyn TransferCache>>,
    context: RwLock<RequestContext>,
    model: RwLock<Option<PageModel>>,
    channel_manager: RwLock<Option<Arc<dyn ChannelManagerApi>>>,
    publisher: ModelPublisher,
}

impl PageModelClient {
    /// Create a client from its collaborators.
    pub fn new(
        api_urls: ApiUrls,
        context: RequestContext,
        render_mode: RenderMode,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            api_urls,
            render_mode,
            transport,
            transfer_cache: None,
            context: RwLock::new(context),
            model: RwLock::new(None),
            channel_manager: RwLock::new(None),
            publisher: ModelPublisher::new(),
        }
    }

    /// Wire up a server-to-client hand-off cache.
    pub fn with_transfer_cache(mut self, cache: Arc<dyn TransferCache>) -> Self {
        self.transfer_cache = Some(cache);
        self
    }

    /// Fetch the page model for the current request context.
    ///
    /// When the hand-off cache is enabled and holds a value it is consumed
    /// instead of issuing a network call. Any failure is logged and reported
    /// as `None`; this operation never surfaces an error.
    pub async fn fetch_page_model(&self) -> Option<PageModel> {
        match self.fetch_inner().await {
            Ok(model) => Some(model),
            Err(error) => {
                tracing::warn!(%error, "fetch_page_model failed");
                None
            }
        }
    }

    async fn fetch_inner(&self) -> Result<PageModel, TransportError> {
        let ctx = self.request_context();

        if ctx.transfer_state {
            if let Some(model) = self.take_transferred_model() {
                return Ok(self.process(model, &ctx));
            }
        }

        let url = build_page_url(&self.api_urls, ctx.preview, &ctx.path, &ctx.query);
        let response = self.transport.get(&url).await?;

        // The raw response is handed off, not the post-processed model; the
        // client pass repeats the post-processing itself.
        if self.render_mode.is_server() && ctx.transfer_state {
            if let Some(cache) = &self.transfer_cache {
                cache.set(TRANSFER_KEY, response.clone());
            }
        }

        let model = PageModel::from_value(response)?;
        Ok(self.process(model, &ctx))
    }

    /// Consume the hand-off value if one is present.
    fn take_transferred_model(&self) -> Option<PageModel> {
        let cache = self.transfer_cache.as_ref()?;
        if !cache.has_key(TRANSFER_KEY) {
            return None;
        }

        let value = cache.get(TRANSFER_KEY, Value::Null);
        cache.remove(TRANSFER_KEY);

        match PageModel::from_value(value) {
            Ok(model) => Some(model),
            Err(error) => {
                tracing::warn!(%error, "discarding undecodable hand-off value");
                None
            }
        }
    }

    /// Post-process a freshly fetched model, store it and publish it.
    fn process(&self, mut model: PageModel, ctx: &RequestContext) -> PageModel {
        let channel_manager = self.channel_manager();
        update_page_meta_data(
            &mut model.page,
            channel_manager.as_deref(),
            ctx.preview,
            ctx.debugging,
        );

        *self.model.write().unwrap() = Some(model.clone());
        self.publisher.publish(model.clone());
        model
    }

    /// Re-render a single component with new property values.
    ///
    /// On success the re-rendered subtree is merged into the current model,
    /// which is then published. On any failure the stored model is left
    /// unchanged, the failure is logged, and `None` is returned.
    pub async fn update_component(
        &self,
        component_id: impl Into<ComponentId>,
        properties: ComponentUpdatePayload,
    ) -> Option<PageModel> {
        let component_id = component_id.into();
        if component_id.is_empty() {
            tracing::warn!("update_component called with an empty component id");
            return None;
        }

        match self.update_inner(&component_id, &properties).await {
            Ok(model) => model,
            Err(error) => {
                tracing::warn!(component = %component_id, %error, "update_component failed");
                None
            }
        }
    }

    async fn update_inner(
        &self,
        component_id: &ComponentId,
        properties: &ComponentUpdatePayload,
    ) -> Result<Option<PageModel>, TransportError> {
        let ctx = self.request_context();
        log_update_component(component_id, properties, ctx.debugging);

        let body = to_form_encoded(properties);
        let url = build_component_url(
            &self.api_urls,
            ctx.preview,
            &ctx.path,
            &ctx.query,
            component_id,
        );

        let response = self.transport.post_form(&url, &body).await?;
        let response = PageModel::from_value(response)?;

        let Some(current) = self.page_model() else {
            tracing::warn!(
                component = %component_id,
                "no page model present, skipping component update merge"
            );
            return Ok(None);
        };

        let channel_manager = self.channel_manager();
        let merged = merge_component(
            &response,
            component_id,
            &current,
            channel_manager.as_deref(),
            ctx.preview,
            ctx.debugging,
        );

        *self.model.write().unwrap() = Some(merged.clone());
        self.publisher.publish(merged.clone());
        Ok(Some(merged))
    }

    /// The current in-memory page model, `None` before the first successful
    /// fetch. No side effects.
    pub fn page_model(&self) -> Option<PageModel> {
        self.model.read().unwrap().clone()
    }

    /// Subscribe to page-model updates. The latest value is replayed to
    /// subscriptions created after a fetch.
    pub fn subscribe(&self) -> ModelSubscription {
        self.publisher.subscribe()
    }

    /// Store the editor-tooling handle passed through to the merge and
    /// metadata helpers. Not validated.
    pub fn set_channel_manager_api(&self, api: Arc<dyn ChannelManagerApi>) {
        *self.channel_manager.write().unwrap() = Some(api);
    }

    /// Replace the request-context snapshot read by subsequent operations.
    pub fn set_request_context(&self, context: RequestContext) {
        *self.context.write().unwrap() = context;
    }

    /// Snapshot of the current request context.
    pub fn request_context(&self) -> RequestContext {
        self.context.read().unwrap().clone()
    }

    /// Resolve a content reference against the current model. Pure lookup:
    /// no caching, no mutation; `None` when no model is present or the
    /// reference does not match.
    pub fn content_via_reference(&self, reference: &str) -> Option<Value> {
        self.model
            .read()
            .unwrap()
            .as_ref()
            .and_then(|model| model.resolve_reference(reference).cloned())
    }

    fn channel_manager(&self) -> Option<Arc<dyn ChannelManagerApi>> {
        self.channel_manager.read().unwrap().clone()
    }
}

/// Log a component-update request when debugging is enabled.
fn log_update_component(
    component_id: &ComponentId,
    properties: &ComponentUpdatePayload,
    debugging: bool,
) {
    if debugging {
        tracing::debug!(component = %component_id, ?properties, "updating component");
    }
}
