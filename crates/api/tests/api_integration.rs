//! Integration tests for the API server.

use std::sync::Arc;
use std::sync::OnceLock;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain::ORDER_CREATED;
use events::RecordingListener;
use metrics_exporter_prometheus::PrometheusHandle;
use order_store::InMemoryOrderStore;
use tower::ServiceExt;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

fn get_metrics_handle() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| {
            let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
            builder
                .install_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone()
}

fn setup() -> axum::Router {
    let (app, _) = setup_with_state();
    app
}

fn setup_with_state() -> (
    axum::Router,
    Arc<api::routes::orders::AppState<InMemoryOrderStore>>,
) {
    let store = InMemoryOrderStore::new();
    let state = api::create_state(store);
    let app = api::create_app(state.clone(), get_metrics_handle());
    (app, state)
}

fn post_order(id: &str, price: f64, tax: f64) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/orders")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({"id": id, "price": price, "tax": tax}).to_string(),
        ))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = setup();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_create_order() {
    let app = setup();

    let response = app.oneshot(post_order("o1", 100.0, 10.0)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["id"], "o1");
    assert_eq!(json["price"], 100.0);
    assert_eq!(json["tax"], 10.0);
    assert_eq!(json["final_price"], 110.0);
}

#[tokio::test]
async fn test_create_order_reaches_registered_listener() {
    let (app, state) = setup_with_state();
    let spy = RecordingListener::new();
    state.dispatcher.register(ORDER_CREATED, spy.clone()).await;

    let response = app.oneshot(post_order("o1", 100.0, 10.0)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let received = spy.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].payload()["final_price"], 110.0);
}

#[tokio::test]
async fn test_create_order_empty_id_is_bad_request() {
    let (app, state) = setup_with_state();
    let spy = RecordingListener::new();
    state.dispatcher.register(ORDER_CREATED, spy.clone()).await;

    let response = app.oneshot(post_order("", 100.0, 10.0)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(
        json["error"].as_str().unwrap().contains("id"),
        "error should name the validation failure: {json}"
    );
    assert_eq!(spy.count(), 0);
}

#[tokio::test]
async fn test_create_order_duplicate_id_is_server_error() {
    let app = setup();

    let first = app
        .clone()
        .oneshot(post_order("o1", 100.0, 10.0))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app.oneshot(post_order("o1", 1.0, 1.0)).await.unwrap();
    assert_eq!(second.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_list_orders_pagination() {
    let (app, _) = setup_with_state();

    for i in 0..23 {
        let response = app
            .clone()
            .oneshot(post_order(&format!("o{i:02}"), f64::from(i), 0.5))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/orders?page=3&limit=10&sort=id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["orders"].as_array().unwrap().len(), 3);
    assert_eq!(json["orders"][0]["id"], "o20");
    assert_eq!(json["page"], 3);
    assert_eq!(json["limit"], 10);
    assert_eq!(json["total"], 23);
    assert_eq!(json["total_pages"], 3);
}

#[tokio::test]
async fn test_list_orders_normalizes_parameters() {
    let app = setup();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/orders?page=0&limit=-5&sort=")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["page"], 1);
    assert_eq!(json["limit"], 10);
    assert_eq!(json["total"], 0);
    assert_eq!(json["total_pages"], 0);
    assert_eq!(json["orders"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_list_orders_without_parameters_uses_defaults() {
    let (app, _) = setup_with_state();

    let created = app
        .clone()
        .oneshot(post_order("o1", 100.0, 10.0))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/orders")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["page"], 1);
    assert_eq!(json["limit"], 10);
    assert_eq!(json["orders"][0]["final_price"], 110.0);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let app = setup();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
