//! The order entity.

use common::OrderId;
use order_store::OrderRecord;
use thiserror::Error;

/// Errors from order construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    /// The identifier was the empty string.
    #[error("order id must not be empty")]
    EmptyId,

    /// The price was negative.
    #[error("price must not be negative, got {0}")]
    NegativePrice(f64),

    /// The tax was negative.
    #[error("tax must not be negative, got {0}")]
    NegativeTax(f64),
}

/// An order: a priced transaction with a derived final price.
///
/// `Order::new` is the only constructor. The final price is always computed
/// from price and tax there and can never be set independently; the entity
/// is immutable after construction and is persisted exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: OrderId,
    price: f64,
    tax: f64,
    final_price: f64,
}

impl Order {
    /// Constructs an order from caller-supplied input.
    ///
    /// Rejects an empty identifier and negative price or tax.
    pub fn new(id: OrderId, price: f64, tax: f64) -> Result<Self, OrderError> {
        if id.is_empty() {
            return Err(OrderError::EmptyId);
        }
        if price < 0.0 {
            return Err(OrderError::NegativePrice(price));
        }
        if tax < 0.0 {
            return Err(OrderError::NegativeTax(tax));
        }

        Ok(Self {
            id,
            price,
            tax,
            final_price: price + tax,
        })
    }

    /// Returns the order identifier.
    pub fn id(&self) -> &OrderId {
        &self.id
    }

    /// Returns the price before tax.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Returns the tax amount.
    pub fn tax(&self) -> f64 {
        self.tax
    }

    /// Returns the derived final price (`price + tax`).
    pub fn final_price(&self) -> f64 {
        self.final_price
    }

    /// Maps the entity to its persistence row.
    pub fn to_record(&self) -> OrderRecord {
        OrderRecord {
            id: self.id.clone(),
            price: self.price,
            tax: self.tax,
            final_price: self.final_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_price_is_price_plus_tax() {
        let order = Order::new(OrderId::new("o1"), 100.0, 10.0).unwrap();
        assert_eq!(order.final_price(), 110.0);

        let order = Order::new(OrderId::new("o2"), 0.0, 0.0).unwrap();
        assert_eq!(order.final_price(), 0.0);

        let order = Order::new(OrderId::new("o3"), 19.99, 2.5).unwrap();
        assert_eq!(order.final_price(), 19.99 + 2.5);
    }

    #[test]
    fn empty_id_is_rejected() {
        let err = Order::new(OrderId::new(""), 100.0, 10.0).unwrap_err();
        assert_eq!(err, OrderError::EmptyId);
    }

    #[test]
    fn negative_amounts_are_rejected() {
        assert_eq!(
            Order::new(OrderId::new("o1"), -1.0, 10.0).unwrap_err(),
            OrderError::NegativePrice(-1.0)
        );
        assert_eq!(
            Order::new(OrderId::new("o1"), 1.0, -0.5).unwrap_err(),
            OrderError::NegativeTax(-0.5)
        );
    }

    #[test]
    fn to_record_mirrors_every_field() {
        let order = Order::new(OrderId::new("o1"), 100.0, 10.0).unwrap();
        let record = order.to_record();
        assert_eq!(record.id, OrderId::new("o1"));
        assert_eq!(record.price, 100.0);
        assert_eq!(record.tax, 10.0);
        assert_eq!(record.final_price, 110.0);
    }
}
