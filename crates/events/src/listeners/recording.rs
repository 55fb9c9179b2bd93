//! Recording listener used as a test spy.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::event::EventEnvelope;
use crate::listener::{EventListener, ListenerError};

/// Records every envelope it receives.
///
/// Constructors return an [`Arc`] so the same instance can be handed to the
/// dispatcher and kept by the test for assertions. `fail_always` builds a
/// spy that still records but returns an error from every invocation, for
/// exercising the dispatcher's isolate-and-continue policy.
#[derive(Debug)]
pub struct RecordingListener {
    name: String,
    received: Mutex<Vec<EventEnvelope>>,
    fail: bool,
}

impl RecordingListener {
    /// Creates a recording listener with the default name.
    pub fn new() -> Arc<Self> {
        Self::named("recording-listener")
    }

    /// Creates a recording listener with an explicit declared name.
    pub fn named(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            received: Mutex::new(Vec::new()),
            fail: false,
        })
    }

    /// Creates a recording listener that fails every invocation.
    pub fn fail_always() -> Arc<Self> {
        Arc::new(Self {
            name: "failing-listener".to_string(),
            received: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    /// Returns the number of invocations recorded so far.
    pub fn count(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    /// Returns a copy of every envelope received so far, in arrival order.
    pub fn received(&self) -> Vec<EventEnvelope> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventListener for RecordingListener {
    fn name(&self) -> &str {
        &self.name
    }

    async fn handle(&self, event: &EventEnvelope) -> Result<(), ListenerError> {
        self.received.lock().unwrap().push(event.clone());
        if self.fail {
            return Err(ListenerError::Handler("instructed to fail".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_in_arrival_order() {
        let spy = RecordingListener::new();
        for i in 0..3 {
            let event = EventEnvelope::new("OrderCreated", serde_json::json!({ "seq": i }));
            spy.handle(&event).await.unwrap();
        }
        let received = spy.received();
        assert_eq!(received.len(), 3);
        assert_eq!(received[0].payload()["seq"], 0);
        assert_eq!(received[2].payload()["seq"], 2);
    }

    #[tokio::test]
    async fn fail_always_records_and_fails() {
        let spy = RecordingListener::fail_always();
        let event = EventEnvelope::new("OrderCreated", serde_json::Value::Null);
        assert!(spy.handle(&event).await.is_err());
        assert_eq!(spy.count(), 1);
    }
}
