use std::sync::Arc;

use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, sea_query::Expr,
};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    subject::{entities::Subject, ports::SubjectRepository},
};
use crate::entity::subjects::{
    ActiveModel as SubjectActiveModel, Column as SubjectColumn, Entity as SubjectEntity,
};
use crate::infrastructure::db::{ConstraintViolation, constraint_violation};

#[derive(Debug, Clone)]
pub struct PostgresSubjectRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresSubjectRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl SubjectRepository for PostgresSubjectRepository {
    async fn list(&self) -> Result<Vec<Subject>, CoreError> {
        let subjects = SubjectEntity::find()
            .order_by_asc(SubjectColumn::Name)
            .order_by_asc(SubjectColumn::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to list subjects: {}", e);
                CoreError::internal("Failed to list subjects")
            })?
            .into_iter()
            .map(Subject::from)
            .collect::<Vec<Subject>>();

        Ok(subjects)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Subject>, CoreError> {
        let subject = SubjectEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to get subject by id: {}", e);
                CoreError::internal("Failed to get subject")
            })?
            .map(Subject::from);

        Ok(subject)
    }

    async fn exists(&self, id: i64) -> Result<bool, CoreError> {
        let count = SubjectEntity::find()
            .filter(SubjectColumn::Id.eq(id))
            .count(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to check subject existence: {}", e);
                CoreError::internal("Failed to check subject")
            })?;

        Ok(count > 0)
    }

    async fn create(&self, name: String) -> Result<Subject, CoreError> {
        let created = SubjectActiveModel {
            id: NotSet,
            name: Set(name),
        }
        .insert(self.db.as_ref())
        .await
        .map_err(|e| {
            error!("Failed to create subject: {}", e);
            CoreError::internal("Failed to create subject")
        })?;

        Ok(Subject::from(created))
    }

    async fn update(&self, id: i64, name: String) -> Result<Option<Subject>, CoreError> {
        let result = SubjectEntity::update_many()
            .col_expr(SubjectColumn::Name, Expr::value(name))
            .filter(SubjectColumn::Id.eq(id))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to update subject: {}", e);
                CoreError::internal("Failed to update subject")
            })?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<bool, CoreError> {
        let result = SubjectEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| match constraint_violation(&e) {
                Some(ConstraintViolation::ForeignKey) => {
                    CoreError::conflict("Subject is still assigned to teachers")
                }
                _ => {
                    error!("Failed to delete subject: {}", e);
                    CoreError::internal("Failed to delete subject")
                }
            })?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};

    use sea_orm::sqlx::error::ErrorKind;

    use super::*;
    use crate::infrastructure::db::test_errors::exec_error;
    use crate::entity::subjects::Model as SubjectModel;

    #[tokio::test]
    async fn test_list_maps_models() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                SubjectModel {
                    id: 2,
                    name: "Chemistry".to_string(),
                },
                SubjectModel {
                    id: 1,
                    name: "Mathematics".to_string(),
                },
            ]])
            .into_connection();

        let subjects = PostgresSubjectRepository::new(Arc::new(db)).list().await.unwrap();

        assert_eq!(
            subjects,
            vec![
                Subject { id: 2, name: "Chemistry".to_string() },
                Subject { id: 1, name: "Mathematics".to_string() },
            ]
        );
    }

    #[tokio::test]
    async fn test_exists_counts_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![BTreeMap::from([("num_items", Value::from(0i64))])]])
            .into_connection();

        assert!(!PostgresSubjectRepository::new(Arc::new(db)).exists(999).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_unknown_subject() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let updated = PostgresSubjectRepository::new(Arc::new(db))
            .update(8, "Art".to_string())
            .await
            .unwrap();

        assert_eq!(updated, None);
    }

    #[tokio::test]
    async fn test_delete_with_assigned_teachers_conflicts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([exec_error(ErrorKind::ForeignKeyViolation)])
            .into_connection();

        let err = PostgresSubjectRepository::new(Arc::new(db))
            .delete(3)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::Conflict("Subject is still assigned to teachers".to_string())
        );
    }

    #[tokio::test]
    async fn test_delete_existing_subject() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        assert!(PostgresSubjectRepository::new(Arc::new(db)).delete(3).await.unwrap());
    }
}
