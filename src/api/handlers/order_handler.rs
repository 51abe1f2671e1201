//! Order handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CreateOrderRequest, Order, OrderQuery};
use crate::errors::{AppError, AppResult};

/// Create order routes
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/:order_number", get(get_order))
}

/// List orders
#[utoipa::path(
    get,
    path = "/orders",
    tag = "Orders",
    params(OrderQuery),
    responses(
        (status = 200, description = "Orders in creation order", body = Vec<Order>),
        (status = 400, description = "Unknown status filter")
    )
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let status = query
        .status()
        .map_err(|e| AppError::bad_request(e.to_string()))?;

    let orders = state
        .order_service
        .list_orders(status, query.customer_name)
        .await?;

    Ok(Json(orders))
}

/// Get order by order number
#[utoipa::path(
    get,
    path = "/orders/{order_number}",
    tag = "Orders",
    params(
        ("order_number" = String, Path, description = "Order number, e.g. ORD-20250101093000123")
    ),
    responses(
        (status = 200, description = "Order details", body = Order),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_number): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state.order_service.get_order(&order_number).await?;
    Ok(Json(order))
}

/// Place a new order
#[utoipa::path(
    post,
    path = "/orders",
    tag = "Orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created in PENDING status", body = Order),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Order number already exists")
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateOrderRequest>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let order = state.order_service.create_order(payload).await?;
    Ok((StatusCode::CREATED, Json(order)))
}
