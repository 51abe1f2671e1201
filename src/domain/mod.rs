//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod hello;
pub mod order;

pub use hello::HelloResponse;
pub use order::{
    generate_order_number, CreateOrderRequest, Order, OrderQuery, OrderStatus,
    ParseOrderStatusError,
};
