use crate::application::http::server::api_entities::api_error::{
    ApiError, ErrorBody, IdPath, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::teacher::validators::UpdateTeacherValidator;
use axum::extract::State;
use registrar_core::domain::teacher::entities::Teacher;
use registrar_core::domain::teacher::ports::TeacherService;
use registrar_core::domain::teacher::value_objects::TeacherPatch;

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "teacher",
    summary = "Update teacher",
    description = "Partial update: only the fields present in the body are written.",
    params(
        ("id" = i64, Path, description = "Teacher ID"),
    ),
    request_body = UpdateTeacherValidator,
    responses(
        (status = 200, body = Teacher),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody),
        (status = 409, body = ErrorBody)
    ),
)]
pub async fn update_teacher(
    IdPath(id): IdPath,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateTeacherValidator>,
) -> Result<Response<Teacher>, ApiError> {
    let teacher = state
        .service
        .update_teacher(
            id,
            TeacherPatch {
                name: payload.name,
                email: payload.email,
                subject_id: payload.subject_id,
                title: payload.title,
                phone: payload.phone,
                weekly_hours: payload.weekly_hours,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(teacher))
}
