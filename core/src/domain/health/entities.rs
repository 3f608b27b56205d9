use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DatabaseHealthStatus {
    pub status: String,
    pub database: String,
}

impl DatabaseHealthStatus {
    pub fn up() -> Self {
        Self {
            status: "ok".to_string(),
            database: "up".to_string(),
        }
    }
}
