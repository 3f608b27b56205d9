use crate::domain::{
    health::ports::HealthCheckRepository, subject::ports::SubjectRepository,
    teacher::ports::TeacherRepository,
};

/// Application service: every use case is implemented on this struct, generic over the
/// repositories it drives so tests can substitute mocks.
#[derive(Clone)]
pub struct Service<T, S, HC>
where
    T: TeacherRepository,
    S: SubjectRepository,
    HC: HealthCheckRepository,
{
    pub(crate) teacher_repository: T,
    pub(crate) subject_repository: S,
    pub(crate) health_check_repository: HC,
}

impl<T, S, HC> Service<T, S, HC>
where
    T: TeacherRepository,
    S: SubjectRepository,
    HC: HealthCheckRepository,
{
    pub fn new(teacher_repository: T, subject_repository: S, health_check_repository: HC) -> Self {
        Self {
            teacher_repository,
            subject_repository,
            health_check_repository,
        }
    }
}
