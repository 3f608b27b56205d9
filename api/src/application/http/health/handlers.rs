use axum::extract::State;
use registrar_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ErrorBody},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LiveResponse {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness check",
    responses(
        (status = 200, body = LiveResponse)
    ),
)]
pub async fn live() -> Response<LiveResponse> {
    Response::OK(LiveResponse {
        status: "ok".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness check",
    description = "Pings the database before answering.",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 503, body = ErrorBody)
    ),
)]
pub async fn ready(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readiness().await.map_err(ApiError::from)?;

    Ok(Response::OK(status))
}
