use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Unique identifier for an event occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Creates a new random event ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an event ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An event as it travels through the dispatcher.
///
/// The envelope is created by the publisher, handed to every listener
/// registered for its name, and discarded after dispatch. It is never
/// persisted.
#[derive(Debug, Clone, Serialize)]
pub struct EventEnvelope {
    event_id: EventId,
    name: String,
    occurred_at: DateTime<Utc>,
    payload: serde_json::Value,
}

impl EventEnvelope {
    /// Creates an envelope for an event occurring now.
    pub fn new(name: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            event_id: EventId::new(),
            name: name.into(),
            occurred_at: Utc::now(),
            payload,
        }
    }

    /// Returns the event ID.
    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    /// Returns the event name used for listener lookup.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns when the event occurred.
    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    /// Returns the event payload.
    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }
}
