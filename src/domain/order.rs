//! Order domain entity and related types.

use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::config::{ORDER_NUMBER_PREFIX, ORDER_NUMBER_TIME_FORMAT};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Stored and wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

/// Raised when a status name is not one of [`OrderStatus::ALL`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown order status: {0}")]
pub struct ParseOrderStatusError(pub String);

impl FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseOrderStatusError(s.to_string()))
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[schema(example = "ORD-20250101093000123")]
    pub order_number: String,
    #[schema(example = "Jane Doe")]
    pub customer_name: String,
    #[schema(example = 15000.0)]
    pub total_amount: f64,
    pub status: OrderStatus,
}

impl Order {
    pub fn new(
        order_number: impl Into<String>,
        customer_name: impl Into<String>,
        total_amount: f64,
        status: OrderStatus,
    ) -> Self {
        Self {
            order_number: order_number.into(),
            customer_name: customer_name.into(),
            total_amount,
            status,
        }
    }

    /// Create a freshly placed order
    pub fn pending(
        order_number: impl Into<String>,
        customer_name: impl Into<String>,
        total_amount: f64,
    ) -> Self {
        Self::new(order_number, customer_name, total_amount, OrderStatus::Pending)
    }
}

/// Order creation request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, max = 100, message = "Customer name must be 1 to 100 characters"))]
    #[schema(example = "Jane Doe", min_length = 1, max_length = 100)]
    pub customer_name: String,
    #[validate(range(
        min = 0.0,
        max = 99999999.99,
        message = "Total amount must be between 0 and 99999999.99"
    ))]
    #[schema(example = 15000.0)]
    pub total_amount: f64,
}

/// Filters accepted by the order listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OrderQuery {
    /// Only orders in this status (e.g. `PENDING`)
    pub status: Option<String>,
    /// Only orders whose customer name contains this fragment
    pub customer_name: Option<String>,
}

impl OrderQuery {
    /// Parse the status filter, if any
    pub fn status(&self) -> Result<Option<OrderStatus>, ParseOrderStatusError> {
        self.status.as_deref().map(OrderStatus::from_str).transpose()
    }
}

/// Build an order number from a local timestamp: `ORD-yyyyMMddHHmmssSSS`
pub fn generate_order_number(now: DateTime<Local>) -> String {
    format!(
        "{}{}",
        ORDER_NUMBER_PREFIX,
        now.format(ORDER_NUMBER_TIME_FORMAT)
    )
}
