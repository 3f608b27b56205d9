use crate::application::http::server::api_entities::api_error::{ApiError, ErrorBody, IdPath};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use registrar_core::domain::subject::ports::SubjectService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteSubjectResponse {
    pub ok: bool,
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "subject",
    summary = "Delete subject",
    description = "Refused with 409 while teachers are still assigned to the subject.",
    params(
        ("id" = i64, Path, description = "Subject ID"),
    ),
    responses(
        (status = 200, body = DeleteSubjectResponse),
        (status = 404, body = ErrorBody),
        (status = 409, body = ErrorBody)
    ),
)]
pub async fn delete_subject(
    IdPath(id): IdPath,
    State(state): State<AppState>,
) -> Result<Response<DeleteSubjectResponse>, ApiError> {
    state
        .service
        .delete_subject(id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteSubjectResponse { ok: true }))
}
