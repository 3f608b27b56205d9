use std::sync::Arc;

use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbBackend, DbErr, EntityTrait, FromQueryResult, QueryFilter, Statement,
    sea_query::Expr,
};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    listing::{CollectionResult, filter::FilterBuilder},
    teacher::{
        entities::Teacher,
        ports::TeacherRepository,
        value_objects::{NewTeacher, TeacherListQuery, TeacherPatch, TeacherSortKey},
    },
};
use crate::entity::teachers::{
    ActiveModel as TeacherActiveModel, Column as TeacherColumn, Entity as TeacherEntity,
};
use crate::infrastructure::{
    db::{ConstraintViolation, bind_placeholders, constraint_violation},
    listing::CollectionQuery,
    teacher::mappers::TeacherRow,
};

const TEACHER_PROJECTION: &str = "t.id, t.name, t.email, t.title, t.phone, t.weekly_hours, \
     t.subject_id, s.name AS subject_name";
const TEACHER_SOURCE: &str = "teachers t LEFT JOIN subjects s ON s.id = t.subject_id";

pub const TEACHERS: CollectionQuery<TeacherSortKey> = CollectionQuery::new(
    "teachers",
    TEACHER_PROJECTION,
    TEACHER_SOURCE,
    FilterBuilder::new(
        "t.subject_id",
        &["t.name", "t.email", "t.title", "t.phone", "s.name"],
    ),
    "subjectId",
);

pub fn teacher_by_id_statement(backend: DbBackend, id: i64) -> Statement {
    let sql = format!("SELECT {TEACHER_PROJECTION} FROM {TEACHER_SOURCE} WHERE t.id = ?");
    Statement::from_sql_and_values(backend, bind_placeholders(&sql, backend), [id.into()])
}

fn write_error(action: &str, e: DbErr) -> CoreError {
    match constraint_violation(&e) {
        Some(ConstraintViolation::Unique) => {
            CoreError::conflict("A teacher with this email already exists")
        }
        Some(ConstraintViolation::ForeignKey) => CoreError::invalid("invalid subjectId"),
        None => {
            error!("Failed to {} teacher: {}", action, e);
            CoreError::internal(format!("Failed to {action} teacher"))
        }
    }
}

#[derive(Debug, Clone)]
pub struct PostgresTeacherRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresTeacherRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn fetch_one(&self, id: i64) -> Result<Option<Teacher>, CoreError> {
        let statement = teacher_by_id_statement(self.db.get_database_backend(), id);

        let teacher = TeacherRow::find_by_statement(statement)
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to get teacher by id: {}", e);
                CoreError::internal("Failed to get teacher")
            })?
            .map(Teacher::from);

        Ok(teacher)
    }
}

impl TeacherRepository for PostgresTeacherRepository {
    async fn list(&self, query: TeacherListQuery) -> Result<CollectionResult<Teacher>, CoreError> {
        let result = TEACHERS.execute::<_, TeacherRow>(self.db.as_ref(), &query).await?;
        Ok(result.map(Teacher::from))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Teacher>, CoreError> {
        self.fetch_one(id).await
    }

    async fn create(&self, teacher: NewTeacher) -> Result<Teacher, CoreError> {
        let created = TeacherActiveModel {
            id: NotSet,
            name: Set(teacher.name),
            email: Set(teacher.email),
            title: Set(teacher.title),
            phone: Set(teacher.phone),
            weekly_hours: Set(teacher.weekly_hours),
            subject_id: Set(Some(teacher.subject_id)),
        }
        .insert(self.db.as_ref())
        .await
        .map_err(|e| write_error("create", e))?;

        self.fetch_one(created.id)
            .await?
            .ok_or_else(|| CoreError::internal("Failed to create teacher"))
    }

    async fn update(&self, id: i64, patch: TeacherPatch) -> Result<Option<Teacher>, CoreError> {
        if patch.is_empty() {
            return self.fetch_one(id).await;
        }

        let mut update = TeacherEntity::update_many();

        if let Some(name) = patch.name {
            update = update.col_expr(TeacherColumn::Name, Expr::value(name));
        }
        if let Some(email) = patch.email {
            update = update.col_expr(TeacherColumn::Email, Expr::value(email));
        }
        if let Some(subject_id) = patch.subject_id {
            update = update.col_expr(TeacherColumn::SubjectId, Expr::value(subject_id));
        }
        if let Some(title) = patch.title {
            update = update.col_expr(TeacherColumn::Title, Expr::value(title));
        }
        if let Some(phone) = patch.phone {
            update = update.col_expr(TeacherColumn::Phone, Expr::value(phone));
        }
        if let Some(weekly_hours) = patch.weekly_hours {
            update = update.col_expr(TeacherColumn::WeeklyHours, Expr::value(weekly_hours));
        }

        let result = update
            .filter(TeacherColumn::Id.eq(id))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| write_error("update", e))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.fetch_one(id).await
    }

    async fn delete(&self, id: i64) -> Result<bool, CoreError> {
        let result = TeacherEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to delete teacher: {}", e);
                CoreError::internal("Failed to delete teacher")
            })?;

        Ok(result.rows_affected > 0)
    }
}
