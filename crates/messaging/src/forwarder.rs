//! Listener that forwards order events to the message broker.

use async_trait::async_trait;

use events::{EventEnvelope, EventListener, ListenerError};

use crate::kafka::KafkaClient;

/// Forwards every event it receives to a Kafka topic.
///
/// The full envelope (event id, name, occurrence time, payload) is published
/// as JSON, keyed by the order id from the payload so all events for one
/// order land in the same partition. Registered for `OrderCreated` at
/// bootstrap when brokers are configured.
pub struct OrderCreatedForwarder {
    client: KafkaClient,
    topic: String,
}

impl OrderCreatedForwarder {
    /// Creates a forwarder publishing to `topic`.
    pub fn new(client: KafkaClient, topic: impl Into<String>) -> Self {
        Self {
            client,
            topic: topic.into(),
        }
    }

    /// Returns the destination topic.
    pub fn topic(&self) -> &str {
        &self.topic
    }
}

#[async_trait]
impl EventListener for OrderCreatedForwarder {
    fn name(&self) -> &str {
        "kafka-order-created-forwarder"
    }

    async fn handle(&self, event: &EventEnvelope) -> Result<(), ListenerError> {
        let key = event
            .payload()
            .get("id")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_string();

        let body = serde_json::to_string(event)
            .map_err(|e| ListenerError::Handler(e.to_string()))?;

        self.client
            .publish(&self.topic, &key, &body)
            .await
            .map_err(|e| ListenerError::Broker(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwarder_declares_a_stable_name_and_topic() {
        let client = KafkaClient::new("localhost:9092").unwrap();
        let forwarder = OrderCreatedForwarder::new(client, "orders");
        assert_eq!(forwarder.name(), "kafka-order-created-forwarder");
        assert_eq!(forwarder.topic(), "orders");
    }
}
