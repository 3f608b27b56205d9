use crate::application::http::{
    health::HealthApiDoc, subject::router::SubjectApiDoc, teacher::router::TeacherApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Registrar API"
    ),
    nest(
        (path = "/teachers", api = TeacherApiDoc),
        (path = "/subjects", api = SubjectApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
