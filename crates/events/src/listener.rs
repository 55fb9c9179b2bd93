use async_trait::async_trait;
use thiserror::Error;

use crate::event::EventEnvelope;

/// Errors a listener can report back to the dispatcher.
///
/// The dispatcher logs these and continues with the remaining listeners;
/// they never reach the publisher.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// Failed to hand the event to an external message broker.
    #[error("broker error: {0}")]
    Broker(String),

    /// The listener's own handling logic failed.
    #[error("handler error: {0}")]
    Handler(String),
}

/// A named capability invoked synchronously when a matching event is dispatched.
///
/// Listener identity within one event name is the listener's declared name:
/// registration appends regardless of name collisions, and removal matches by
/// name. Listeners must be safe to invoke concurrently from multiple requests;
/// the dispatcher only serializes dispatches against registry mutation, not
/// against each other.
#[async_trait]
pub trait EventListener: Send + Sync {
    /// Returns the declared name of this listener.
    fn name(&self) -> &str;

    /// Handles a single dispatched event.
    async fn handle(&self, event: &EventEnvelope) -> Result<(), ListenerError>;
}
