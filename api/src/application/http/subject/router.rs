use super::handlers::create_subject::{__path_create_subject, create_subject};
use super::handlers::delete_subject::{__path_delete_subject, delete_subject};
use super::handlers::get_subject::{__path_get_subject, get_subject};
use super::handlers::get_subjects::{__path_get_subjects, get_subjects};
use super::handlers::update_subject::{__path_update_subject, update_subject};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_subjects, get_subject, create_subject, update_subject, delete_subject))]
pub struct SubjectApiDoc;

pub fn subject_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/subjects", state.args.server.root_path),
            get(get_subjects).post(create_subject),
        )
        .route(
            &format!("{}/subjects/{{id}}", state.args.server.root_path),
            get(get_subject).put(update_subject).delete(delete_subject),
        )
}
