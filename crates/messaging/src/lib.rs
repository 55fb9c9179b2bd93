//! Message-broker integration for the order system.
//!
//! Provides [`KafkaClient`], a thin producer wrapper, and
//! [`OrderCreatedForwarder`], the listener that forwards dispatched events
//! to a Kafka topic.

pub mod forwarder;
pub mod kafka;

pub use forwarder::OrderCreatedForwarder;
pub use kafka::KafkaClient;
