//! Order repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, LikeExpr, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use super::entities::order::{self, Entity as OrderEntity};
use super::mapper;
use crate::domain::{Order, OrderStatus};
use crate::errors::{AppError, AppResult};
use crate::infra::id::new_order_id;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Order repository trait for dependency injection.
///
/// List queries return orders in creation order. Rows whose stored status
/// cannot be mapped are left out.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// List every order
    async fn find_all(&self) -> AppResult<Vec<Order>>;

    /// Find an order by its order number
    async fn find_by_order_number(&self, order_number: &str) -> AppResult<Option<Order>>;

    /// List orders in the given status
    async fn find_by_status(&self, status: OrderStatus) -> AppResult<Vec<Order>>;

    /// List orders whose customer name contains `fragment`
    async fn find_by_customer_name_containing(&self, fragment: &str) -> AppResult<Vec<Order>>;

    /// List orders in the given status whose customer name contains `fragment`
    async fn find_by_status_and_customer_name_containing(
        &self,
        status: OrderStatus,
        fragment: &str,
    ) -> AppResult<Vec<Order>>;

    /// Insert a new order. A taken order number is a `Conflict`, never an update.
    async fn insert(&self, order: Order) -> AppResult<Order>;

    /// Insert the order, or update the row with the same order number
    async fn save(&self, order: Order) -> AppResult<Order>;

    /// Remove every order
    async fn delete_all(&self) -> AppResult<()>;
}

/// Concrete implementation of OrderRepository
pub struct OrderStore {
    db: DatabaseConnection,
}

impl OrderStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_all(models: Vec<order::Model>) -> Vec<Order> {
        models.into_iter().filter_map(mapper::to_domain).collect()
    }

    fn saved(model: order::Model) -> AppResult<Order> {
        mapper::to_domain(model)
            .ok_or_else(|| AppError::internal("Failed to map saved order row to Order"))
    }
}

/// Escape LIKE metacharacters so `fragment` only ever matches literally.
fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// `customer_name LIKE '%fragment%'` with the fragment taken literally
fn customer_name_contains(fragment: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(fragment));
    Expr::col(order::Column::CustomerName).like(LikeExpr::new(pattern).escape('\\'))
}

#[async_trait]
impl OrderRepository for OrderStore {
    async fn find_all(&self) -> AppResult<Vec<Order>> {
        let models = OrderEntity::find()
            .order_by_asc(order::Column::Id)
            .all(&self.db)
            .await?;

        Ok(Self::map_all(models))
    }

    async fn find_by_order_number(&self, order_number: &str) -> AppResult<Option<Order>> {
        let result = OrderEntity::find()
            .filter(order::Column::OrderNumber.eq(order_number))
            .one(&self.db)
            .await?;

        Ok(result.and_then(mapper::to_domain))
    }

    async fn find_by_status(&self, status: OrderStatus) -> AppResult<Vec<Order>> {
        let models = OrderEntity::find()
            .filter(order::Column::Status.eq(status.as_str()))
            .order_by_asc(order::Column::Id)
            .all(&self.db)
            .await?;

        Ok(Self::map_all(models))
    }

    async fn find_by_customer_name_containing(&self, fragment: &str) -> AppResult<Vec<Order>> {
        let models = OrderEntity::find()
            .filter(customer_name_contains(fragment))
            .order_by_asc(order::Column::Id)
            .all(&self.db)
            .await?;

        Ok(Self::map_all(models))
    }

    async fn find_by_status_and_customer_name_containing(
        &self,
        status: OrderStatus,
        fragment: &str,
    ) -> AppResult<Vec<Order>> {
        let models = OrderEntity::find()
            .filter(order::Column::Status.eq(status.as_str()))
            .filter(customer_name_contains(fragment))
            .order_by_asc(order::Column::Id)
            .all(&self.db)
            .await?;

        Ok(Self::map_all(models))
    }

    async fn insert(&self, order: Order) -> AppResult<Order> {
        let id = new_order_id();
        tracing::debug!(order_number = %order.order_number, %id, "Inserting order");

        let model = mapper::to_active_model(&order, id, Utc::now())
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, "Order"))?;

        Self::saved(model)
    }

    async fn save(&self, order: Order) -> AppResult<Order> {
        let now = Utc::now();
        let existing = OrderEntity::find()
            .filter(order::Column::OrderNumber.eq(order.order_number.as_str()))
            .one(&self.db)
            .await?;

        let model = match existing {
            Some(row) => {
                tracing::debug!(order_number = %order.order_number, "Updating order");
                mapper::apply_to(row, &order, now)
                    .update(&self.db)
                    .await
                    .map_err(|e| AppError::from_write(e, "Order"))?
            }
            None => return self.insert(order).await,
        };

        Self::saved(model)
    }

    async fn delete_all(&self) -> AppResult<()> {
        let result = OrderEntity::delete_many().exec(&self.db).await?;
        tracing::info!("Deleted {} orders", result.rows_affected);
        Ok(())
    }
}
