//! Order service - Handles order-related business logic.

use async_trait::async_trait;
use chrono::Local;
use std::sync::Arc;
use std::time::Duration;

use crate::config::ORDER_NUMBER_MAX_ATTEMPTS;
use crate::domain::{generate_order_number, CreateOrderRequest, Order, OrderStatus};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::OrderRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Order service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OrderService: Send + Sync {
    /// List orders, optionally narrowed by status and/or customer name fragment
    async fn list_orders(
        &self,
        status: Option<OrderStatus>,
        customer_name: Option<String>,
    ) -> AppResult<Vec<Order>>;

    /// Get a single order by order number
    async fn get_order(&self, order_number: &str) -> AppResult<Order>;

    /// Place a new order in `PENDING` status
    async fn create_order(&self, request: CreateOrderRequest) -> AppResult<Order>;
}

/// Concrete implementation of OrderService.
pub struct OrderManager {
    orders: Arc<dyn OrderRepository>,
}

impl OrderManager {
    /// Create new order service instance
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl OrderService for OrderManager {
    async fn list_orders(
        &self,
        status: Option<OrderStatus>,
        customer_name: Option<String>,
    ) -> AppResult<Vec<Order>> {
        match (status, customer_name) {
            (Some(status), Some(fragment)) => {
                self.orders
                    .find_by_status_and_customer_name_containing(status, &fragment)
                    .await
            }
            (Some(status), None) => self.orders.find_by_status(status).await,
            (None, Some(fragment)) => {
                self.orders
                    .find_by_customer_name_containing(&fragment)
                    .await
            }
            (None, None) => self.orders.find_all().await,
        }
    }

    async fn get_order(&self, order_number: &str) -> AppResult<Order> {
        self.orders
            .find_by_order_number(order_number)
            .await?
            .ok_or_not_found()
    }

    async fn create_order(&self, request: CreateOrderRequest) -> AppResult<Order> {
        let mut attempt = 1;
        loop {
            let order = Order::pending(
                generate_order_number(Local::now()),
                request.customer_name.clone(),
                request.total_amount,
            );

            match self.orders.insert(order).await {
                Ok(saved) => {
                    tracing::info!(order_number = %saved.order_number, "Order created");
                    return Ok(saved);
                }
                // Order numbers have millisecond resolution
                Err(AppError::Conflict(_)) if attempt < ORDER_NUMBER_MAX_ATTEMPTS => {
                    tracing::debug!(attempt, "Order number taken, retrying");
                    attempt += 1;
                    tokio::time::sleep(Duration::from_millis(1)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
