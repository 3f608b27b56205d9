use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body for both create and update.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubjectValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}
