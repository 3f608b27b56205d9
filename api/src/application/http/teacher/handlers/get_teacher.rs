use crate::application::http::server::api_entities::api_error::{ApiError, ErrorBody, IdPath};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use registrar_core::domain::teacher::entities::Teacher;
use registrar_core::domain::teacher::ports::TeacherService;

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "teacher",
    summary = "Get teacher",
    params(
        ("id" = i64, Path, description = "Teacher ID"),
    ),
    responses(
        (status = 200, body = Teacher),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody)
    ),
)]
pub async fn get_teacher(
    IdPath(id): IdPath,
    State(state): State<AppState>,
) -> Result<Response<Teacher>, ApiError> {
    let teacher = state
        .service
        .get_teacher(id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(teacher))
}
