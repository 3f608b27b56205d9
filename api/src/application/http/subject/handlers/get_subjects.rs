use crate::application::http::server::api_entities::api_error::{ApiError, ErrorBody};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use registrar_core::domain::subject::entities::Subject;
use registrar_core::domain::subject::ports::SubjectService;

#[utoipa::path(
    get,
    path = "",
    tag = "subject",
    summary = "List subjects",
    description = "Every subject ordered by name. Feeds the subject picker and filter.",
    responses(
        (status = 200, body = Vec<Subject>),
        (status = 500, body = ErrorBody)
    ),
)]
pub async fn get_subjects(
    State(state): State<AppState>,
) -> Result<Response<Vec<Subject>>, ApiError> {
    let subjects = state
        .service
        .list_subjects()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(subjects))
}
