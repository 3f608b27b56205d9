use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, non_blank, services::Service},
    health::ports::HealthCheckRepository,
    subject::{
        entities::Subject,
        ports::{SubjectRepository, SubjectService},
        value_objects::{CreateSubjectInput, UpdateSubjectInput},
    },
    teacher::ports::TeacherRepository,
};

const SUBJECT_NOT_FOUND: &str = "Subject not found";

fn required_name(name: &str) -> Result<String, CoreError> {
    non_blank(name).ok_or_else(|| CoreError::invalid("name is required"))
}

impl<T, S, HC> SubjectService for Service<T, S, HC>
where
    T: TeacherRepository,
    S: SubjectRepository,
    HC: HealthCheckRepository,
{
    async fn list_subjects(&self) -> Result<Vec<Subject>, CoreError> {
        self.subject_repository.list().await
    }

    async fn get_subject(&self, id: i64) -> Result<Subject, CoreError> {
        self.subject_repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found(SUBJECT_NOT_FOUND))
    }

    #[instrument(skip(self))]
    async fn create_subject(&self, input: CreateSubjectInput) -> Result<Subject, CoreError> {
        let name = required_name(&input.name)?;
        self.subject_repository.create(name).await
    }

    #[instrument(skip(self))]
    async fn update_subject(&self, input: UpdateSubjectInput) -> Result<Subject, CoreError> {
        let name = required_name(&input.name)?;
        self.subject_repository
            .update(input.id, name)
            .await?
            .ok_or_else(|| CoreError::not_found(SUBJECT_NOT_FOUND))
    }

    #[instrument(skip(self))]
    async fn delete_subject(&self, id: i64) -> Result<(), CoreError> {
        if self.subject_repository.delete(id).await? {
            Ok(())
        } else {
            Err(CoreError::not_found(SUBJECT_NOT_FOUND))
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::{
        health::ports::MockHealthCheckRepository, subject::ports::MockSubjectRepository,
        teacher::ports::MockTeacherRepository,
    };

    fn service(
        subjects: MockSubjectRepository,
    ) -> Service<MockTeacherRepository, MockSubjectRepository, MockHealthCheckRepository> {
        Service::new(
            MockTeacherRepository::new(),
            subjects,
            MockHealthCheckRepository::new(),
        )
    }

    #[tokio::test]
    async fn test_create_trims_name() {
        let mut subjects = MockSubjectRepository::new();
        subjects
            .expect_create()
            .with(eq("Physics".to_string()))
            .times(1)
            .returning(|name| Box::pin(async move { Ok(Subject { id: 3, name }) }));

        let subject = service(subjects)
            .create_subject(CreateSubjectInput {
                name: "  Physics ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(subject, Subject { id: 3, name: "Physics".to_string() });
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        let err = service(MockSubjectRepository::new())
            .create_subject(CreateSubjectInput {
                name: " ".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::Invalid("name is required".to_string()));

        let err = service(MockSubjectRepository::new())
            .update_subject(UpdateSubjectInput {
                id: 1,
                name: String::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::Invalid("name is required".to_string()));
    }

    #[tokio::test]
    async fn test_update_missing_subject_is_not_found() {
        let mut subjects = MockSubjectRepository::new();
        subjects
            .expect_update()
            .returning(|_, _| Box::pin(async { Ok(None) }));

        let err = service(subjects)
            .update_subject(UpdateSubjectInput {
                id: 12,
                name: "History".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NotFound("Subject not found".to_string()));
    }

    #[tokio::test]
    async fn test_delete_missing_subject_is_not_found() {
        let mut subjects = MockSubjectRepository::new();
        subjects
            .expect_delete()
            .with(eq(4))
            .returning(|_| Box::pin(async { Ok(false) }));

        let err = service(subjects).delete_subject(4).await.unwrap_err();

        assert!(matches!(err, CoreError::NotFound(_)));
    }
}
