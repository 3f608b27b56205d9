use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    domain::common::{RegistrarConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        subject::PostgresSubjectRepository,
        teacher::PostgresTeacherRepository,
    },
};

pub type RegistrarService =
    Service<PostgresTeacherRepository, PostgresSubjectRepository, PostgresHealthCheckRepository>;

/// Connects to the store and wires every repository onto the shared pool.
pub async fn create_service(config: RegistrarConfig) -> Result<RegistrarService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
        pool: config.database.pool.clone(),
    })
    .await?;

    Ok(service_from_pool(postgres.get_db()))
}

/// Wires the service onto an already open connection, e.g. a `MockDatabase` in tests.
pub fn service_from_connection(db: DatabaseConnection) -> RegistrarService {
    service_from_pool(Arc::new(db))
}

fn service_from_pool(db: Arc<DatabaseConnection>) -> RegistrarService {
    Service::new(
        PostgresTeacherRepository::new(Arc::clone(&db)),
        PostgresSubjectRepository::new(Arc::clone(&db)),
        PostgresHealthCheckRepository::new(db),
    )
}
