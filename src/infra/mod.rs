//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Order persistence (entities, mapping, repository)
//! - Time-ordered identifier generation

pub mod db;
pub mod id;
pub mod repositories;

pub use db::{Database, Migrator};
pub use id::new_order_id;
pub use repositories::{OrderRepository, OrderStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockOrderRepository;
