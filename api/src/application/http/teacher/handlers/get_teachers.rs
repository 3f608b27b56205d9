use crate::application::http::query_extractor::{FilterKeys, ListParamsExtractor};
use crate::application::http::server::api_entities::api_error::{ApiError, ErrorBody};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use registrar_core::domain::listing::{CollectionResult, PageMeta};
use registrar_core::domain::teacher::entities::Teacher;
use registrar_core::domain::teacher::ports::TeacherService;
use serde::Serialize;
use utoipa::ToSchema;

/// Teachers are filtered by subject, under either name.
#[derive(Debug, Clone, Copy)]
pub struct SubjectFilter;

impl FilterKeys for SubjectFilter {
    const KEYS: &'static [&'static str] = &["subjectId", "filterId"];
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GetTeachersResponse {
    pub data: Vec<Teacher>,
    #[schema(value_type = Object)]
    pub meta: PageMeta,
}

impl From<CollectionResult<Teacher>> for GetTeachersResponse {
    fn from(result: CollectionResult<Teacher>) -> Self {
        Self {
            data: result.data,
            meta: result.meta,
        }
    }
}

#[utoipa::path(
    get,
    path = "",
    tag = "teacher",
    summary = "List teachers",
    description = "Paginated, sorted and filtered list of teachers joined with their subject.",
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-based. Defaults to 1"),
        ("limit" = Option<u64>, Query, description = "Rows per page, clamped to 1..=100. Defaults to 10"),
        ("sortBy" = Option<String>, Query, description = "One of id, name, email, subject, title, weeklyHours"),
        ("sortDir" = Option<String>, Query, description = "asc or desc (default)"),
        ("q" = Option<String>, Query, description = "Case-insensitive search over name, email, title, phone and subject name"),
        ("subjectId" = Option<i64>, Query, description = "Only teachers assigned to this subject. filterId is accepted as an alias"),
    ),
    responses(
        (status = 200, body = GetTeachersResponse),
        (status = 500, body = ErrorBody)
    ),
)]
pub async fn get_teachers(
    State(state): State<AppState>,
    ListParamsExtractor(params, _): ListParamsExtractor<SubjectFilter>,
) -> Result<Response<GetTeachersResponse>, ApiError> {
    let teachers = state
        .service
        .list_teachers(params)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(teachers.into()))
}
