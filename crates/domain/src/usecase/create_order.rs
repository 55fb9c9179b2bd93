//! Create-order use case.

use std::sync::Arc;

use common::OrderId;
use events::{EventDispatcher, EventEnvelope};
use order_store::OrderStore;
use serde::Deserialize;

use crate::error::DomainError;
use crate::order::Order;

use super::OrderOutput;

/// Name of the event published after a successful order creation.
pub const ORDER_CREATED: &str = "OrderCreated";

/// Raw caller input for order creation. The identifier is caller-controlled;
/// nothing is generated server-side.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderInput {
    pub id: String,
    pub price: f64,
    pub tax: f64,
}

/// Creates an order: validate, persist, publish.
///
/// The dispatcher is injected and shared across use cases; how many listeners
/// it carries — zero, one, or many — is invisible here. Exactly one save is
/// issued per execution and, on save success, exactly one dispatch.
pub struct CreateOrderUseCase<S: OrderStore> {
    store: S,
    dispatcher: Arc<EventDispatcher>,
}

impl<S: OrderStore> CreateOrderUseCase<S> {
    /// Creates the use case over a store and the shared dispatcher.
    pub fn new(store: S, dispatcher: Arc<EventDispatcher>) -> Self {
        Self { store, dispatcher }
    }

    /// Executes the use case.
    ///
    /// A validation failure aborts before any storage call; a storage failure
    /// aborts before any event is published. Once the save succeeds the event
    /// is always dispatched, and listener failures never roll anything back.
    #[tracing::instrument(skip(self, input), fields(order_id = %input.id))]
    pub async fn execute(&self, input: CreateOrderInput) -> Result<OrderOutput, DomainError> {
        let order = Order::new(OrderId::new(input.id), input.price, input.tax)?;

        self.store.save(&order.to_record()).await?;
        metrics::counter!("orders_created").increment(1);

        let output = OrderOutput::from(&order);
        let event = EventEnvelope::new(ORDER_CREATED, serde_json::to_value(&output)?);
        self.dispatcher.dispatch(&event).await;

        tracing::info!(final_price = output.final_price, "order created");
        Ok(output)
    }
}
