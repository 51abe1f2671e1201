//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{OrderService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Order service
    pub order_service: Arc<dyn OrderService>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state backed by the given database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());

        Self {
            order_service: container.orders(),
            database,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(order_service: Arc<dyn OrderService>, database: Arc<Database>) -> Self {
        Self {
            order_service,
            database,
        }
    }
}
