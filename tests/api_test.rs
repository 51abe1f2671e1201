//! Integration tests for API endpoints.
//!
//! The order endpoints run against a stub service, so these tests exercise
//! routing, extraction and JSON shapes without depending on stored data.
//! The health endpoint pings an in-memory SQLite database.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use order_api::api::{create_router, AppState};
use order_api::domain::{CreateOrderRequest, Order, OrderStatus};
use order_api::errors::{AppError, AppResult};
use order_api::infra::Database;
use order_api::services::OrderService;
use sea_orm::DatabaseConnection;

// =============================================================================
// Stub Service
// =============================================================================

/// Order service returning canned orders and recording the filters it receives
#[derive(Default)]
struct StubOrderService {
    orders: Vec<Order>,
    last_filter: Mutex<Option<(Option<OrderStatus>, Option<String>)>>,
}

impl StubOrderService {
    fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders,
            ..Self::default()
        }
    }
}

#[async_trait]
impl OrderService for StubOrderService {
    async fn list_orders(
        &self,
        status: Option<OrderStatus>,
        customer_name: Option<String>,
    ) -> AppResult<Vec<Order>> {
        *self.last_filter.lock().unwrap() = Some((status, customer_name));
        Ok(self.orders.clone())
    }

    async fn get_order(&self, order_number: &str) -> AppResult<Order> {
        self.orders
            .iter()
            .find(|o| o.order_number == order_number)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn create_order(&self, request: CreateOrderRequest) -> AppResult<Order> {
        Ok(Order::pending(
            "ORD-20251220000000001",
            request.customer_name,
            request.total_amount,
        ))
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

async fn app_with(service: Arc<StubOrderService>) -> Router {
    let database = Database::connect("sqlite::memory:", 1).await.unwrap();
    create_router(AppState::new(service, Arc::new(database)))
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

// =============================================================================
// Hello
// =============================================================================

#[tokio::test]
async fn test_hello_returns_greeting_with_timestamp() {
    let app = app_with(Arc::new(StubOrderService::default())).await;

    let (status, body) = send(app, Method::GET, "/hello", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hello, World!");
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    assert!(timestamp.ends_with('Z'));
}

// =============================================================================
// Orders
// =============================================================================

#[tokio::test]
async fn test_get_all_orders_empty() {
    let app = app_with(Arc::new(StubOrderService::default())).await;

    let (status, body) = send(app, Method::GET, "/orders", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_get_all_orders_with_data() {
    let service = Arc::new(StubOrderService::with_orders(vec![
        Order::new("ORD-001", "テストユーザー", 10000.00, OrderStatus::Pending),
        Order::new("ORD-002", "別のユーザー", 5000.00, OrderStatus::Confirmed),
    ]));
    let app = app_with(service).await;

    let (status, body) = send(app, Method::GET, "/orders", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["orderNumber"], "ORD-001");
    assert_eq!(body[0]["customerName"], "テストユーザー");
    assert_eq!(body[0]["status"], "PENDING");
    assert_eq!(body[1]["orderNumber"], "ORD-002");
    assert_eq!(body[1]["customerName"], "別のユーザー");
    assert_eq!(body[1]["status"], "CONFIRMED");
}

#[tokio::test]
async fn test_list_orders_passes_filters() {
    let service = Arc::new(StubOrderService::default());
    let app = app_with(service.clone()).await;

    // "鈴木" percent-encoded
    let uri = "/orders?status=SHIPPED&customerName=%E9%88%B4%E6%9C%A8";
    let (status, _) = send(app, Method::GET, uri, None).await;

    assert_eq!(status, StatusCode::OK);
    let filter = service.last_filter.lock().unwrap().clone();
    assert_eq!(
        filter,
        Some((Some(OrderStatus::Shipped), Some("鈴木".to_string())))
    );
}

#[tokio::test]
async fn test_list_orders_rejects_unknown_status() {
    let app = app_with(Arc::new(StubOrderService::default())).await;

    let (status, body) = send(app, Method::GET, "/orders?status=LOST", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_get_order_by_order_number_found() {
    let service = Arc::new(StubOrderService::with_orders(vec![Order::new(
        "ORD-001",
        "取得テスト",
        5000.00,
        OrderStatus::Confirmed,
    )]));
    let app = app_with(service).await;

    let (status, body) = send(app, Method::GET, "/orders/ORD-001", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["orderNumber"], "ORD-001");
    assert_eq!(body["customerName"], "取得テスト");
    assert_eq!(body["totalAmount"], 5000.00);
    assert_eq!(body["status"], "CONFIRMED");
}

#[tokio::test]
async fn test_get_order_by_order_number_not_found() {
    let app = app_with(Arc::new(StubOrderService::default())).await;

    let (status, body) = send(app, Method::GET, "/orders/NOT-EXIST", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_order() {
    let app = app_with(Arc::new(StubOrderService::default())).await;
    let request = json!({ "customerName": "新規顧客", "totalAmount": 15000.00 });

    let (status, body) = send(app, Method::POST, "/orders", Some(request)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["orderNumber"].as_str().unwrap().starts_with("ORD-"));
    assert_eq!(body["customerName"], "新規顧客");
    assert_eq!(body["totalAmount"], 15000.00);
    assert_eq!(body["status"], "PENDING");
}

#[tokio::test]
async fn test_create_order_validation_error() {
    let app = app_with(Arc::new(StubOrderService::default())).await;
    let request = json!({ "customerName": "", "totalAmount": -5 });

    let (status, body) = send(app, Method::POST, "/orders", Some(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_order_missing_amount() {
    let app = app_with(Arc::new(StubOrderService::default())).await;
    let request = json!({ "customerName": "新規顧客" });

    let (status, body) = send(app, Method::POST, "/orders", Some(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

// =============================================================================
// Health & Docs
// =============================================================================

#[tokio::test]
async fn test_health_reports_database() {
    let app = app_with(Arc::new(StubOrderService::default())).await;

    let (status, body) = send(app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_health_degraded_when_database_unreachable() {
    let database = Database::from(DatabaseConnection::Disconnected);
    let app = create_router(AppState::new(
        Arc::new(StubOrderService::default()),
        Arc::new(database),
    ));

    let (status, body) = send(app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["services"]["database"]["status"], "unhealthy");
    assert!(body["services"]["database"]["error"].is_string());
}

#[tokio::test]
async fn test_openapi_document_lists_order_paths() {
    let app = app_with(Arc::new(StubOrderService::default())).await;

    let (status, body) = send(app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/orders"].is_object());
    assert!(body["paths"]["/orders/{order_number}"].is_object());
    assert!(body["paths"]["/hello"].is_object());
}
