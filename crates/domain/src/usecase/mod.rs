//! Application use cases and their data transfer objects.

pub mod create_order;
pub mod list_orders;

pub use create_order::{CreateOrderInput, CreateOrderUseCase, ORDER_CREATED};
pub use list_orders::{ListOrdersInput, ListOrdersUseCase, OrdersPage};

use order_store::OrderRecord;
use serde::{Deserialize, Serialize};

use crate::order::Order;

/// Outward snapshot of one order, as returned by both use cases and carried
/// as the `OrderCreated` event payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderOutput {
    pub id: String,
    pub price: f64,
    pub tax: f64,
    pub final_price: f64,
}

impl From<&Order> for OrderOutput {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id().to_string(),
            price: order.price(),
            tax: order.tax(),
            final_price: order.final_price(),
        }
    }
}

impl From<&OrderRecord> for OrderOutput {
    fn from(record: &OrderRecord) -> Self {
        Self {
            id: record.id.to_string(),
            price: record.price,
            tax: record.tax,
            final_price: record.final_price,
        }
    }
}
