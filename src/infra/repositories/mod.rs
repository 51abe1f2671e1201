//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
pub(crate) mod mapper;
mod order_repository;

pub use order_repository::{OrderRepository, OrderStore};

#[cfg(any(test, feature = "test-utils"))]
pub use order_repository::MockOrderRepository;
