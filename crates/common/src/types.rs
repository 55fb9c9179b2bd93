use serde::{Deserialize, Serialize};

/// Unique identifier for an order.
///
/// Order identifiers are opaque strings supplied by the caller at creation
/// time; the system never generates them. Wrapping the string provides type
/// safety and prevents mixing up order ids with other string-based values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Creates an order ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the order ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_preserves_value() {
        let id = OrderId::new("order-1");
        assert_eq!(id.as_str(), "order-1");
        assert_eq!(id.to_string(), "order-1");
    }

    #[test]
    fn order_id_equality_is_by_value() {
        assert_eq!(OrderId::new("a"), OrderId::from("a"));
        assert_ne!(OrderId::new("a"), OrderId::new("b"));
    }

    #[test]
    fn order_id_empty_probe() {
        assert!(OrderId::new("").is_empty());
        assert!(!OrderId::new("o1").is_empty());
    }

    #[test]
    fn order_id_serialization_roundtrip() {
        let id = OrderId::new("order-42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"order-42\"");
        let deserialized: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
