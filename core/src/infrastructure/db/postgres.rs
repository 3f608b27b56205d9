use std::sync::Arc;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::domain::common::PoolConfig;

#[derive(Clone, Debug)]
pub struct PostgresConfig {
    pub database_url: String,
    pub pool: PoolConfig,
}

/// Owns the bounded connection pool shared by every repository.
#[derive(Clone)]
pub struct Postgres {
    db: Arc<DatabaseConnection>,
}

impl Postgres {
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let mut options = ConnectOptions::new(config.database_url);
        options
            .max_connections(config.pool.max_connections)
            .min_connections(config.pool.min_connections)
            .acquire_timeout(config.pool.acquire_timeout)
            .sqlx_logging(false);

        let db = Database::connect(options).await?;

        info!(
            max_connections = config.pool.max_connections,
            "connected to postgres"
        );

        Ok(Self { db: Arc::new(db) })
    }

    pub fn get_db(&self) -> Arc<DatabaseConnection> {
        Arc::clone(&self.db)
    }
}
