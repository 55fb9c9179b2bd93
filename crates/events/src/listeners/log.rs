//! Listener that logs every dispatched event.

use async_trait::async_trait;

use crate::event::EventEnvelope;
use crate::listener::{EventListener, ListenerError};

/// Logs a structured line for every event it receives.
#[derive(Debug, Clone, Default)]
pub struct LoggingListener;

impl LoggingListener {
    /// Creates a new logging listener.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventListener for LoggingListener {
    fn name(&self) -> &str {
        "logging-listener"
    }

    async fn handle(&self, event: &EventEnvelope) -> Result<(), ListenerError> {
        tracing::info!(
            event = event.name(),
            event_id = %event.event_id(),
            occurred_at = %event.occurred_at(),
            payload = %event.payload(),
            "event received"
        );
        Ok(())
    }
}
