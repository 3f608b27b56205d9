use sea_orm::FromQueryResult;

use crate::domain::teacher::entities::Teacher;

/// Teacher row joined with its subject name.
#[derive(Debug, Clone, FromQueryResult)]
pub struct TeacherRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub title: String,
    pub phone: Option<String>,
    pub weekly_hours: i32,
    pub subject_id: Option<i64>,
    pub subject_name: Option<String>,
}

impl From<TeacherRow> for Teacher {
    fn from(row: TeacherRow) -> Self {
        Teacher {
            id: row.id,
            name: row.name,
            email: row.email,
            title: row.title,
            phone: row.phone,
            weekly_hours: row.weekly_hours,
            subject_id: row.subject_id,
            subject_name: row.subject_name,
        }
    }
}
