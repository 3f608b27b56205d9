use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, non_blank, services::Service},
    health::ports::HealthCheckRepository,
    listing::{CollectionResult, ListParams},
    subject::ports::SubjectRepository,
    teacher::{
        entities::Teacher,
        ports::{TeacherRepository, TeacherService},
        value_objects::{
            CreateTeacherInput, DEFAULT_TITLE, DEFAULT_WEEKLY_HOURS, NewTeacher, TeacherListQuery,
            TeacherPatch,
        },
    },
};

const TEACHER_NOT_FOUND: &str = "Teacher not found";
const INVALID_SUBJECT: &str = "invalid subjectId";

impl<T, S, HC> Service<T, S, HC>
where
    T: TeacherRepository,
    S: SubjectRepository,
    HC: HealthCheckRepository,
{
    async fn ensure_subject_exists(&self, subject_id: i64) -> Result<(), CoreError> {
        if self.subject_repository.exists(subject_id).await? {
            Ok(())
        } else {
            Err(CoreError::invalid(INVALID_SUBJECT))
        }
    }
}

impl<T, S, HC> TeacherService for Service<T, S, HC>
where
    T: TeacherRepository,
    S: SubjectRepository,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self))]
    async fn list_teachers(&self, params: ListParams) -> Result<CollectionResult<Teacher>, CoreError> {
        let query = TeacherListQuery::parse(&params);
        self.teacher_repository.list(query).await
    }

    async fn get_teacher(&self, id: i64) -> Result<Teacher, CoreError> {
        self.teacher_repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found(TEACHER_NOT_FOUND))
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    async fn create_teacher(&self, input: CreateTeacherInput) -> Result<Teacher, CoreError> {
        let (Some(name), Some(email)) = (non_blank(&input.name), non_blank(&input.email)) else {
            return Err(CoreError::invalid("name and email are required"));
        };

        let subject_id = input
            .subject_id
            .filter(|id| *id != 0)
            .ok_or_else(|| CoreError::invalid("subjectId is required"))?;

        self.ensure_subject_exists(subject_id).await?;

        let teacher = NewTeacher {
            name,
            email,
            subject_id,
            title: input.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            phone: input.phone,
            weekly_hours: input.weekly_hours.unwrap_or(DEFAULT_WEEKLY_HOURS),
        };

        self.teacher_repository.create(teacher).await
    }

    #[instrument(skip(self, patch))]
    async fn update_teacher(&self, id: i64, patch: TeacherPatch) -> Result<Teacher, CoreError> {
        if let Some(Some(subject_id)) = patch.subject_id {
            self.ensure_subject_exists(subject_id).await?;
        }

        if patch.is_empty() {
            return Err(CoreError::invalid("Nothing to update"));
        }

        self.teacher_repository
            .update(id, patch)
            .await?
            .ok_or_else(|| CoreError::not_found(TEACHER_NOT_FOUND))
    }

    #[instrument(skip(self))]
    async fn delete_teacher(&self, id: i64) -> Result<(), CoreError> {
        if self.teacher_repository.delete(id).await? {
            Ok(())
        } else {
            Err(CoreError::not_found(TEACHER_NOT_FOUND))
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::{
        health::ports::MockHealthCheckRepository,
        listing::{PageMeta, sort::SortDirection},
        subject::ports::MockSubjectRepository,
        teacher::{ports::MockTeacherRepository, value_objects::TeacherSortKey},
    };

    type TestService = Service<MockTeacherRepository, MockSubjectRepository, MockHealthCheckRepository>;

    fn service(teachers: MockTeacherRepository, subjects: MockSubjectRepository) -> TestService {
        Service::new(teachers, subjects, MockHealthCheckRepository::new())
    }

    fn teacher(id: i64) -> Teacher {
        Teacher {
            id,
            name: "Ada Lovelace".to_string(),
            email: "ada@school.test".to_string(),
            title: "PhD".to_string(),
            phone: Some("555-0101".to_string()),
            weekly_hours: 20,
            subject_id: Some(1),
            subject_name: Some("Mathematics".to_string()),
        }
    }

    fn valid_input() -> CreateTeacherInput {
        CreateTeacherInput {
            name: "Ada Lovelace".to_string(),
            email: "ada@school.test".to_string(),
            subject_id: Some(1),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_list_parses_params_before_querying() {
        let mut teachers = MockTeacherRepository::new();
        teachers
            .expect_list()
            .withf(|query: &TeacherListQuery| {
                query.window.page == 2
                    && query.window.limit == 100
                    && query.window.offset == 100
                    && query.sort.key == TeacherSortKey::Id
                    && query.sort.direction == SortDirection::Asc
                    && query.search.as_deref() == Some("math")
                    && query.filter_id.is_none()
            })
            .times(1)
            .returning(|query| {
                let meta = PageMeta::new(&query, 0, "subjectId");
                Box::pin(async move { Ok(CollectionResult { data: vec![], meta }) })
            });

        let result = service(teachers, MockSubjectRepository::new())
            .list_teachers(ListParams {
                page: Some("2".to_string()),
                limit: Some("500".to_string()),
                sort_by: Some("nope".to_string()),
                sort_dir: Some("ASC".to_string()),
                q: Some(" math ".to_string()),
                filter_id: Some("abc".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(result.meta.total_pages, 1);
        assert_eq!(result.meta.sort_by, "id");
    }

    #[tokio::test]
    async fn test_get_missing_teacher_is_not_found() {
        let mut teachers = MockTeacherRepository::new();
        teachers
            .expect_get_by_id()
            .with(eq(42))
            .returning(|_| Box::pin(async { Ok(None) }));

        let err = service(teachers, MockSubjectRepository::new())
            .get_teacher(42)
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NotFound("Teacher not found".to_string()));
    }

    #[tokio::test]
    async fn test_create_without_email_never_touches_store() {
        let input = CreateTeacherInput {
            email: "   ".to_string(),
            ..valid_input()
        };

        let err = service(MockTeacherRepository::new(), MockSubjectRepository::new())
            .create_teacher(input)
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::Invalid("name and email are required".to_string()));
    }

    #[tokio::test]
    async fn test_create_without_subject_is_rejected() {
        for subject_id in [None, Some(0)] {
            let input = CreateTeacherInput {
                subject_id,
                ..valid_input()
            };

            let err = service(MockTeacherRepository::new(), MockSubjectRepository::new())
                .create_teacher(input)
                .await
                .unwrap_err();

            assert_eq!(err, CoreError::Invalid("subjectId is required".to_string()));
        }
    }

    #[tokio::test]
    async fn test_create_with_unknown_subject_inserts_nothing() {
        let mut subjects = MockSubjectRepository::new();
        subjects
            .expect_exists()
            .with(eq(999))
            .times(1)
            .returning(|_| Box::pin(async { Ok(false) }));

        let input = CreateTeacherInput {
            subject_id: Some(999),
            ..valid_input()
        };

        let err = service(MockTeacherRepository::new(), subjects)
            .create_teacher(input)
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::Invalid("invalid subjectId".to_string()));
    }

    #[tokio::test]
    async fn test_create_applies_defaults() {
        let mut subjects = MockSubjectRepository::new();
        subjects
            .expect_exists()
            .returning(|_| Box::pin(async { Ok(true) }));

        let mut teachers = MockTeacherRepository::new();
        teachers
            .expect_create()
            .with(eq(NewTeacher {
                name: "Ada Lovelace".to_string(),
                email: "ada@school.test".to_string(),
                subject_id: 1,
                title: "Graduate".to_string(),
                phone: None,
                weekly_hours: 20,
            }))
            .times(1)
            .returning(|_| Box::pin(async { Ok(teacher(1)) }));

        let created = service(teachers, subjects)
            .create_teacher(valid_input())
            .await
            .unwrap();

        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_create_surfaces_conflict() {
        let mut subjects = MockSubjectRepository::new();
        subjects
            .expect_exists()
            .returning(|_| Box::pin(async { Ok(true) }));

        let mut teachers = MockTeacherRepository::new();
        teachers.expect_create().returning(|_| {
            Box::pin(async { Err(CoreError::conflict("A teacher with this email already exists")) })
        });

        let err = service(teachers, subjects)
            .create_teacher(valid_input())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_forwards_only_supplied_fields() {
        let patch = TeacherPatch {
            phone: Some(Some("123".to_string())),
            ..Default::default()
        };

        let mut teachers = MockTeacherRepository::new();
        teachers
            .expect_update()
            .with(eq(7), eq(patch.clone()))
            .times(1)
            .returning(|id, _| {
                Box::pin(async move {
                    Ok(Some(Teacher {
                        phone: Some("123".to_string()),
                        ..teacher(id)
                    }))
                })
            });

        let updated = service(teachers, MockSubjectRepository::new())
            .update_teacher(7, patch)
            .await
            .unwrap();

        assert_eq!(updated.phone.as_deref(), Some("123"));
        assert_eq!(updated.name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_update_with_nothing_is_rejected() {
        let err = service(MockTeacherRepository::new(), MockSubjectRepository::new())
            .update_teacher(7, TeacherPatch::default())
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::Invalid("Nothing to update".to_string()));
    }

    #[tokio::test]
    async fn test_update_checks_new_subject() {
        let mut subjects = MockSubjectRepository::new();
        subjects
            .expect_exists()
            .with(eq(5))
            .returning(|_| Box::pin(async { Ok(false) }));

        let patch = TeacherPatch {
            subject_id: Some(Some(5)),
            ..Default::default()
        };

        let err = service(MockTeacherRepository::new(), subjects)
            .update_teacher(7, patch)
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::Invalid("invalid subjectId".to_string()));
    }

    #[tokio::test]
    async fn test_update_clearing_subject_skips_existence_check() {
        let mut teachers = MockTeacherRepository::new();
        teachers.expect_update().returning(|id, _| {
            Box::pin(async move {
                Ok(Some(Teacher {
                    subject_id: None,
                    subject_name: None,
                    ..teacher(id)
                }))
            })
        });

        let patch = TeacherPatch {
            subject_id: Some(None),
            ..Default::default()
        };

        let updated = service(teachers, MockSubjectRepository::new())
            .update_teacher(7, patch)
            .await
            .unwrap();

        assert_eq!(updated.subject_id, None);
    }

    #[tokio::test]
    async fn test_update_missing_teacher_is_not_found() {
        let mut teachers = MockTeacherRepository::new();
        teachers
            .expect_update()
            .returning(|_, _| Box::pin(async { Ok(None) }));

        let patch = TeacherPatch {
            name: Some("Grace".to_string()),
            ..Default::default()
        };

        let err = service(teachers, MockSubjectRepository::new())
            .update_teacher(7, patch)
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_teacher_is_not_found() {
        let mut teachers = MockTeacherRepository::new();
        teachers
            .expect_delete()
            .with(eq(9999))
            .returning(|_| Box::pin(async { Ok(false) }));

        let err = service(teachers, MockSubjectRepository::new())
            .delete_teacher(9999)
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NotFound("Teacher not found".to_string()));
    }
}
