//! Conversion between the `orders` row and the [`Order`] domain entity.

use chrono::{DateTime, Utc};
use sea_orm::Set;
use uuid::Uuid;

use super::entities::order::{ActiveModel, Model};
use crate::domain::{Order, OrderStatus};

/// Convert a stored row to a domain order.
///
/// Returns `None` when the row carries a status this build does not know.
pub fn to_domain(model: Model) -> Option<Order> {
    match model.status.parse::<OrderStatus>() {
        Ok(status) => Some(Order {
            order_number: model.order_number,
            customer_name: model.customer_name,
            total_amount: cents_to_amount(model.total_amount_cents),
            status,
        }),
        Err(e) => {
            tracing::warn!(order_id = %model.id, "Skipping order row: {}", e);
            None
        }
    }
}

/// Build a row for a new order.
pub fn to_active_model(order: &Order, id: Uuid, now: DateTime<Utc>) -> ActiveModel {
    ActiveModel {
        id: Set(id),
        order_number: Set(order.order_number.clone()),
        customer_name: Set(order.customer_name.clone()),
        total_amount_cents: Set(amount_to_cents(order.total_amount)),
        status: Set(order.status.as_str().to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

/// Overwrite an existing row with the order's fields, keeping `id` and `created_at`.
pub fn apply_to(existing: Model, order: &Order, now: DateTime<Utc>) -> ActiveModel {
    let mut active: ActiveModel = existing.into();
    active.order_number = Set(order.order_number.clone());
    active.customer_name = Set(order.customer_name.clone());
    active.total_amount_cents = Set(amount_to_cents(order.total_amount));
    active.status = Set(order.status.as_str().to_string());
    active.updated_at = Set(now);
    active
}

/// Amount to hundredths, rounded half away from zero.
pub fn amount_to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

pub fn cents_to_amount(cents: i64) -> f64 {
    cents as f64 / 100.0
}
