use crate::application::http::server::api_entities::api_error::{
    ApiError, ErrorBody, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::subject::validators::SubjectValidator;
use axum::extract::State;
use registrar_core::domain::subject::entities::Subject;
use registrar_core::domain::subject::ports::SubjectService;
use registrar_core::domain::subject::value_objects::CreateSubjectInput;

#[utoipa::path(
    post,
    path = "",
    tag = "subject",
    summary = "Create subject",
    request_body = SubjectValidator,
    responses(
        (status = 201, body = Subject),
        (status = 400, body = ErrorBody)
    ),
)]
pub async fn create_subject(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SubjectValidator>,
) -> Result<Response<Subject>, ApiError> {
    let subject = state
        .service
        .create_subject(CreateSubjectInput { name: payload.name })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(subject))
}
