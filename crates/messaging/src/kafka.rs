//! Thin Kafka producer wrapper.

use std::time::Duration;

use rdkafka::config::ClientConfig;
use rdkafka::error::KafkaError;
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::util::Timeout;

const SEND_TIMEOUT: Duration = Duration::from_secs(5);

/// Kafka producer client.
///
/// Delivery failures are reported to the caller and otherwise dropped:
/// retry and dead-lettering of event delivery are outside this system's
/// scope.
#[derive(Clone)]
pub struct KafkaClient {
    producer: FutureProducer,
}

impl KafkaClient {
    /// Creates a producer connected to the given bootstrap brokers.
    pub fn new(brokers: &str) -> Result<Self, KafkaError> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("message.timeout.ms", "5000")
            .create()?;

        Ok(Self { producer })
    }

    /// Publishes one keyed message and waits for broker acknowledgement.
    pub async fn publish(&self, topic: &str, key: &str, payload: &str) -> Result<(), KafkaError> {
        let record = FutureRecord::to(topic).key(key).payload(payload);

        match self
            .producer
            .send(record, Timeout::After(SEND_TIMEOUT))
            .await
        {
            Ok(_) => {
                tracing::info!(topic, key, "published to Kafka");
                Ok(())
            }
            Err((error, _)) => {
                tracing::error!(topic, key, %error, "failed to publish to Kafka");
                Err(error)
            }
        }
    }
}
