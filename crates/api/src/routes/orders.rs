//! Order creation and listing endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use domain::{
    CreateOrderInput, CreateOrderUseCase, ListOrdersInput, ListOrdersUseCase, OrderOutput,
    OrdersPage,
};
use events::EventDispatcher;
use order_store::OrderStore;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: OrderStore> {
    pub create_order: CreateOrderUseCase<S>,
    pub list_orders: ListOrdersUseCase<S>,
    pub dispatcher: Arc<EventDispatcher>,
}

// -- Request types --

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub id: String,
    pub price: f64,
    pub tax: f64,
}

#[derive(Deserialize, Default)]
pub struct ListOrdersQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub sort: Option<String>,
}

// -- Response types --

#[derive(Serialize)]
pub struct OrderResponse {
    pub id: String,
    pub price: f64,
    pub tax: f64,
    pub final_price: f64,
}

impl From<OrderOutput> for OrderResponse {
    fn from(output: OrderOutput) -> Self {
        Self {
            id: output.id,
            price: output.price,
            tax: output.tax,
            final_price: output.final_price,
        }
    }
}

#[derive(Serialize)]
pub struct ListOrdersResponse {
    pub orders: Vec<OrderResponse>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl From<OrdersPage> for ListOrdersResponse {
    fn from(page: OrdersPage) -> Self {
        Self {
            orders: page.orders.into_iter().map(Into::into).collect(),
            page: page.page,
            limit: page.limit,
            total: page.total,
            total_pages: page.total_pages,
        }
    }
}

// -- Handlers --

/// POST /orders — create an order.
#[tracing::instrument(skip(state, req), fields(order_id = %req.id))]
pub async fn create<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError> {
    let output = state
        .create_order
        .execute(CreateOrderInput {
            id: req.id,
            price: req.price,
            tax: req.tax,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(output.into())))
}

/// GET /orders — list orders with pagination.
///
/// Example: `GET /orders?page=1&limit=10&sort=id`. Missing or out-of-range
/// parameters are silently normalized by the use case.
#[tracing::instrument(skip(state, query))]
pub async fn list<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<ListOrdersResponse>, ApiError> {
    let page = state
        .list_orders
        .execute(ListOrdersInput {
            page: query.page.unwrap_or(0),
            limit: query.limit.unwrap_or(0),
            sort: query.sort.unwrap_or_default(),
        })
        .await?;

    Ok(Json(page.into()))
}
