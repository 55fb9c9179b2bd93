//! HTTP API server with observability for the order system.
//!
//! Exposes order creation and listing over REST, with structured logging
//! (tracing) and Prometheus metrics. The router is generic over the
//! [`OrderStore`] backend so tests run against the in-memory store and the
//! binary can run against PostgreSQL.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use domain::{CreateOrderUseCase, ListOrdersUseCase};
use events::EventDispatcher;
use metrics_exporter_prometheus::PrometheusHandle;
use order_store::OrderStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::orders::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: OrderStore + Clone + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/orders", post(routes::orders::create::<S>))
        .route("/orders", get(routes::orders::list::<S>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state: both use cases over the given store and a
/// freshly constructed dispatcher shared between them.
///
/// The dispatcher starts empty; the caller registers listeners before
/// serving. Tests construct isolated states so each case gets its own
/// dispatcher instance.
pub fn create_state<S: OrderStore + Clone + 'static>(store: S) -> Arc<AppState<S>> {
    let dispatcher = Arc::new(EventDispatcher::new());

    Arc::new(AppState {
        create_order: CreateOrderUseCase::new(store.clone(), dispatcher.clone()),
        list_orders: ListOrdersUseCase::new(store),
        dispatcher,
    })
}
