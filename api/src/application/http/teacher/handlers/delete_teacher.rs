use crate::application::http::server::api_entities::api_error::{ApiError, ErrorBody, IdPath};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use registrar_core::domain::teacher::ports::TeacherService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteTeacherResponse {
    pub ok: bool,
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "teacher",
    summary = "Delete teacher",
    params(
        ("id" = i64, Path, description = "Teacher ID"),
    ),
    responses(
        (status = 200, body = DeleteTeacherResponse),
        (status = 404, body = ErrorBody)
    ),
)]
pub async fn delete_teacher(
    IdPath(id): IdPath,
    State(state): State<AppState>,
) -> Result<Response<DeleteTeacherResponse>, ApiError> {
    state
        .service
        .delete_teacher(id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteTeacherResponse { ok: true }))
}
