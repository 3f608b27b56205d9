use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::error;

use crate::domain::{common::entities::app_errors::CoreError, health::ports::HealthCheckRepository};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn ping(&self) -> Result<(), CoreError> {
        self.db.ping().await.map_err(|e| {
            error!("Database ping failed: {}", e);
            CoreError::ServiceUnavailable
        })
    }
}
