use crate::application::http::server::api_entities::api_error::{
    ApiError, ErrorBody, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::teacher::validators::CreateTeacherValidator;
use axum::extract::State;
use registrar_core::domain::teacher::entities::Teacher;
use registrar_core::domain::teacher::ports::TeacherService;
use registrar_core::domain::teacher::value_objects::CreateTeacherInput;

#[utoipa::path(
    post,
    path = "",
    tag = "teacher",
    summary = "Create teacher",
    description = "Creates a teacher assigned to an existing subject. `title` defaults to \"Graduate\" and `weeklyHours` to 20.",
    request_body = CreateTeacherValidator,
    responses(
        (status = 201, body = Teacher),
        (status = 400, body = ErrorBody),
        (status = 409, body = ErrorBody)
    ),
)]
pub async fn create_teacher(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateTeacherValidator>,
) -> Result<Response<Teacher>, ApiError> {
    let teacher = state
        .service
        .create_teacher(CreateTeacherInput {
            name: payload.name,
            email: payload.email,
            subject_id: payload.subject_id,
            title: payload.title,
            phone: payload.phone,
            weekly_hours: payload.weekly_hours,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(teacher))
}
