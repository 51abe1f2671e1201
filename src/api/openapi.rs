//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{hello_handler, order_handler};
use crate::domain::{CreateOrderRequest, HelloResponse, Order, OrderStatus};

/// OpenAPI documentation for the Order API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order API",
        version = "0.1.0",
        description = "Order placement and lookup API with Axum and SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        hello_handler::hello,
        order_handler::list_orders,
        order_handler::get_order,
        order_handler::create_order,
    ),
    components(
        schemas(
            HelloResponse,
            Order,
            OrderStatus,
            CreateOrderRequest,
        )
    ),
    tags(
        (name = "Hello", description = "Greeting endpoint"),
        (name = "Orders", description = "Order placement and lookup")
    )
)]
pub struct ApiDoc;
