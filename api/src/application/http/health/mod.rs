pub mod handlers;

use axum::{Router, routing::get};
use handlers::{__path_live, __path_ready, live, ready};
use utoipa::OpenApi;

use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(live, ready))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/health/live", root_path), get(live))
        .route(&format!("{}/health/ready", root_path), get(ready))
}
