//! Broadcast-with-replay channel for page-model updates.

use pagemodel_core::PageModel;
use tokio::sync::watch;

/// Sender half owned by the client; retains the latest published value.
pub(crate) struct ModelPublisher {
    tx: watch::Sender<Option<PageModel>>,
}

impl ModelPublisher {
    pub(crate) fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Publish a new model; delivered to all live subscriptions and replayed
    /// to any subscription created afterwards.
    pub(crate) fn publish(&self, model: PageModel) {
        // send_replace stores the value even with zero live receivers, so
        // replay still works for subscribers that join later.
        self.tx.send_replace(Some(model));
    }

    pub(crate) fn subscribe(&self) -> ModelSubscription {
        ModelSubscription {
            rx: Some(self.tx.subscribe()),
        }
    }
}

/// Subscription onto the stream of page-model values.
///
/// The channel retains the most recent value, so a subscription created
/// after a fetch still observes the current model via [`latest`].
///
/// [`latest`]: ModelSubscription::latest
pub struct ModelSubscription {
    rx: Option<watch::Receiver<Option<PageModel>>>,
}

impl ModelSubscription {
    /// The most recent published value, or `None` before the first fetch.
    pub fn latest(&self) -> Option<PageModel> {
        self.rx.as_ref().and_then(|rx| rx.borrow().clone())
    }

    /// Wait until a value newer than the last one seen is published and
    /// return it. Returns `None` once unsubscribed or when the client has
    /// been dropped.
    pub async fn changed(&mut self) -> Option<PageModel> {
        let rx = self.rx.as_mut()?;
        rx.changed().await.ok()?;
        rx.borrow_and_update().clone()
    }

    /// Cancel the subscription. Safe to call more than once; subsequent
    /// calls are no-ops.
    pub fn unsubscribe(&mut self) {
        self.rx = None;
    }

    /// Whether the subscription is still attached to the channel.
    pub fn is_active(&self) -> bool {
        self.rx.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn model(label: &str) -> PageModel {
        PageModel::new(json!({ "id": "root", "label": label }))
    }

    #[test]
    fn test_latest_is_none_before_first_publish() {
        let publisher = ModelPublisher::new();
        let subscription = publisher.subscribe();
        assert!(subscription.latest().is_none());
    }

    #[test]
    fn test_late_subscriber_sees_latest_value() {
        let publisher = ModelPublisher::new();
        publisher.publish(model("first"));

        let subscription = publisher.subscribe();
        assert_eq!(subscription.latest(), Some(model("first")));
    }

    #[tokio::test]
    async fn test_changed_delivers_new_value() {
        let publisher = ModelPublisher::new();
        let mut subscription = publisher.subscribe();

        publisher.publish(model("fresh"));
        assert_eq!(subscription.changed().await, Some(model("fresh")));
    }

    #[tokio::test]
    async fn test_unsubscribe_is_idempotent() {
        let publisher = ModelPublisher::new();
        let mut subscription = publisher.subscribe();

        subscription.unsubscribe();
        subscription.unsubscribe();

        assert!(!subscription.is_active());
        assert!(subscription.latest().is_none());
        assert!(subscription.changed().await.is_none());
    }

    #[tokio::test]
    async fn test_changed_ends_when_publisher_dropped() {
        let publisher = ModelPublisher::new();
        let mut subscription = publisher.subscribe();

        drop(publisher);
        assert!(subscription.changed().await.is_none());
    }
}
