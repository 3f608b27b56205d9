use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeacherValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "name and email are required"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "name and email are required"))]
    pub email: String,

    #[serde(default)]
    pub subject_id: Option<i64>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub weekly_hours: Option<i32>,
}

/// Partial update. `subjectId` and `phone` distinguish an absent key (left untouched)
/// from an explicit `null` (column cleared).
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeacherValidator {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i64>)]
    pub subject_id: Option<Option<i64>>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub phone: Option<Option<String>>,

    #[serde(default)]
    pub weekly_hours: Option<i32>,
}

fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
