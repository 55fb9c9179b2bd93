//! In-process publish/subscribe event bus for the order system.
//!
//! This crate provides the event side of the system:
//! - [`EventEnvelope`] carrying an event name, occurrence time, and JSON payload
//! - [`EventListener`] trait for named, synchronously invoked handlers
//! - [`EventDispatcher`] mapping event names to ordered listener sets
//! - Built-in listeners: a tracing logger and a recording test spy

pub mod dispatcher;
pub mod event;
pub mod listener;
pub mod listeners;

pub use dispatcher::EventDispatcher;
pub use event::{EventEnvelope, EventId};
pub use listener::{EventListener, ListenerError};
pub use listeners::{LoggingListener, RecordingListener};
