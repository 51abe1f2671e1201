//! HTTP request handlers.

pub mod health_handler;
pub mod hello_handler;
pub mod order_handler;

pub use health_handler::health;
pub use hello_handler::hello_routes;
pub use order_handler::order_routes;
