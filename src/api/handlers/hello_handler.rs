//! Hello handler.

use axum::{response::Json, routing::get, Router};
use chrono::Utc;

use crate::api::AppState;
use crate::domain::HelloResponse;

/// Create hello routes
pub fn hello_routes() -> Router<AppState> {
    Router::new().route("/", get(hello))
}

/// Greeting with the current server time
#[utoipa::path(
    get,
    path = "/hello",
    tag = "Hello",
    responses(
        (status = 200, description = "Greeting", body = HelloResponse)
    )
)]
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse::at(Utc::now()))
}
