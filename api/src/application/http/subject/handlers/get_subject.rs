use crate::application::http::server::api_entities::api_error::{ApiError, ErrorBody, IdPath};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use registrar_core::domain::subject::entities::Subject;
use registrar_core::domain::subject::ports::SubjectService;

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "subject",
    summary = "Get subject",
    params(
        ("id" = i64, Path, description = "Subject ID"),
    ),
    responses(
        (status = 200, body = Subject),
        (status = 404, body = ErrorBody)
    ),
)]
pub async fn get_subject(
    IdPath(id): IdPath,
    State(state): State<AppState>,
) -> Result<Response<Subject>, ApiError> {
    let subject = state
        .service
        .get_subject(id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(subject))
}
