//! Domain layer for the order system.
//!
//! This crate provides the business core:
//! - [`Order`] entity with its construction invariants
//! - [`CreateOrderUseCase`] — validate, persist, publish `OrderCreated`
//! - [`ListOrdersUseCase`] — normalize pagination, query, compute page metadata
//!
//! Use cases depend only on the [`OrderStore`](order_store::OrderStore)
//! contract and the shared [`EventDispatcher`](events::EventDispatcher);
//! they are ignorant of which storage backend, broker, or protocol adapter
//! is wired in around them.

pub mod error;
pub mod order;
pub mod usecase;

pub use error::DomainError;
pub use order::{Order, OrderError};
pub use usecase::{
    CreateOrderInput, CreateOrderUseCase, ListOrdersInput, ListOrdersUseCase, ORDER_CREATED,
    OrderOutput, OrdersPage,
};
