//! Event dispatcher mapping event names to ordered listener sets.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::event::EventEnvelope;
use crate::listener::EventListener;

/// In-process publish/subscribe registry.
///
/// One dispatcher instance is constructed at process start and shared by
/// every use case that publishes events. The registry is mutable shared
/// state; all operations take the internal lock so that a dispatch never
/// iterates a listener set while another task mutates it.
///
/// Listener failures are isolated: a failing listener is logged and counted,
/// and every remaining listener still runs. `dispatch` is therefore
/// infallible from the publisher's point of view.
#[derive(Default)]
pub struct EventDispatcher {
    listeners: RwLock<HashMap<String, Vec<Arc<dyn EventListener>>>>,
}

impl EventDispatcher {
    /// Creates an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a listener to the set for `event_name`, creating the set if absent.
    ///
    /// Registration is append-only: registering two listeners that declare the
    /// same name keeps both. Callers wanting idempotent registration should
    /// probe with [`has`](Self::has) first.
    pub async fn register(&self, event_name: &str, listener: Arc<dyn EventListener>) {
        let mut listeners = self.listeners.write().await;
        listeners
            .entry(event_name.to_string())
            .or_default()
            .push(listener);
    }

    /// Removes every listener whose declared name matches, for that event only.
    ///
    /// A no-op if no listener matches. Removing all same-named listeners (rather
    /// than only the first) makes removal idempotent for callers that registered
    /// the same handler more than once.
    pub async fn remove(&self, event_name: &str, listener_name: &str) {
        let mut listeners = self.listeners.write().await;
        if let Some(slot) = listeners.get_mut(event_name) {
            slot.retain(|l| l.name() != listener_name);
            if slot.is_empty() {
                listeners.remove(event_name);
            }
        }
    }

    /// Clears all listeners for one event.
    pub async fn remove_all(&self, event_name: &str) {
        self.listeners.write().await.remove(event_name);
    }

    /// Clears the entire registry. The dispatcher remains usable afterwards.
    pub async fn clear(&self) {
        self.listeners.write().await.clear();
    }

    /// Returns true if a listener with the given name is registered for the event.
    pub async fn has(&self, event_name: &str, listener_name: &str) -> bool {
        self.listeners
            .read()
            .await
            .get(event_name)
            .is_some_and(|slot| slot.iter().any(|l| l.name() == listener_name))
    }

    /// Returns the number of listeners registered for the event.
    pub async fn listener_count(&self, event_name: &str) -> usize {
        self.listeners
            .read()
            .await
            .get(event_name)
            .map_or(0, Vec::len)
    }

    /// Invokes every listener registered for `event.name()`, in registration order.
    ///
    /// Returns only after all listeners have run, so a slow listener directly
    /// extends the publisher's latency. The listener set is snapshotted under
    /// the read lock before invocation; registrations and removals made while
    /// listeners run take effect on the next dispatch. Dispatching an event
    /// with zero registered listeners is a no-op.
    #[tracing::instrument(skip(self, event), fields(event = %event.name()))]
    pub async fn dispatch(&self, event: &EventEnvelope) {
        let snapshot: Vec<Arc<dyn EventListener>> = {
            let listeners = self.listeners.read().await;
            match listeners.get(event.name()) {
                Some(slot) => slot.clone(),
                None => return,
            }
        };

        for listener in &snapshot {
            if let Err(error) = listener.handle(event).await {
                metrics::counter!("dispatcher_listener_failures").increment(1);
                tracing::error!(
                    listener = listener.name(),
                    %error,
                    "listener failed, continuing with remaining listeners"
                );
            }
        }

        metrics::counter!("dispatcher_events_dispatched").increment(1);
        tracing::debug!(listeners = snapshot.len(), "event dispatched");
    }
}
