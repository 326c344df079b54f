//! Editor-tooling handle.

/// Opaque handle onto in-context editing tooling.
///
/// The SDK never interprets the handle. It is stored by the client and
/// passed through to the merge and metadata helpers, which ask the tooling
/// to re-attach its overlays after the page model changes.
pub trait ChannelManagerApi: Send + Sync {
    /// Ask the editor tooling to re-scan the rendered page.
    fn sync(&self);
}
