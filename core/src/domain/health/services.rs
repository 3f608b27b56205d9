use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    subject::ports::SubjectRepository,
    teacher::ports::TeacherRepository,
};

impl<T, S, HC> HealthCheckService for Service<T, S, HC>
where
    T: TeacherRepository,
    S: SubjectRepository,
    HC: HealthCheckRepository,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.ping().await?;
        Ok(DatabaseHealthStatus::up())
    }
}
