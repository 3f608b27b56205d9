use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub title: String,
    pub phone: Option<String>,
    pub weekly_hours: i32,
    pub subject_id: Option<i64>,
    /// Name of the assigned subject, joined at read time.
    pub subject_name: Option<String>,
}
