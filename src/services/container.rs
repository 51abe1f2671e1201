//! Service Container - Centralized service access.

use std::sync::Arc;

use super::{OrderManager, OrderService};
use crate::infra::OrderStore;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get order service
    fn orders(&self) -> Arc<dyn OrderService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    order_service: Arc<dyn OrderService>,
}

impl Services {
    /// Create a new service container from already built services
    pub fn new(order_service: Arc<dyn OrderService>) -> Self {
        Self { order_service }
    }

    /// Create service container from a database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let order_repo = Arc::new(OrderStore::new(db));
        let order_service = Arc::new(OrderManager::new(order_repo));

        Self { order_service }
    }
}

impl ServiceContainer for Services {
    fn orders(&self) -> Arc<dyn OrderService> {
        self.order_service.clone()
    }
}
