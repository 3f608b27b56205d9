use crate::application::http::server::api_entities::api_error::{
    ApiError, ErrorBody, IdPath, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::subject::validators::SubjectValidator;
use axum::extract::State;
use registrar_core::domain::subject::entities::Subject;
use registrar_core::domain::subject::ports::SubjectService;
use registrar_core::domain::subject::value_objects::UpdateSubjectInput;

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "subject",
    summary = "Rename subject",
    params(
        ("id" = i64, Path, description = "Subject ID"),
    ),
    request_body = SubjectValidator,
    responses(
        (status = 200, body = Subject),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody)
    ),
)]
pub async fn update_subject(
    IdPath(id): IdPath,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SubjectValidator>,
) -> Result<Response<Subject>, ApiError> {
    let subject = state
        .service
        .update_subject(UpdateSubjectInput {
            id,
            name: payload.name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(subject))
}
