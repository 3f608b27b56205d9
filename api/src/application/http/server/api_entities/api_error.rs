use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use registrar_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::debug;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    InternalServerError(String),
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ErrorBody {
    pub erro: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Invalid(message) => ApiError::BadRequest(message),
            CoreError::NotFound(message) => ApiError::NotFound(message),
            CoreError::Conflict(message) => ApiError::Conflict(message),
            CoreError::InternalServerError(message) => ApiError::InternalServerError(message),
            CoreError::ServiceUnavailable => {
                ApiError::ServiceUnavailable("Database unavailable".to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!("rejected request body: {}", rejection.body_text());
        ApiError::BadRequest("Invalid JSON body".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            erro: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that runs the payload's `validator` rules before the handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value
            .validate()
            .map_err(|errors| ApiError::BadRequest(first_message(&errors)))?;

        Ok(ValidateJson(value))
    }
}

/// Picks one message out of a failed validation, taking fields in name order so the
/// answer does not depend on hash order.
fn first_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by(|(left, _), (right, _)| left.cmp(right));

    fields
        .into_iter()
        .flat_map(|(_, errors)| errors.iter())
        .find_map(|error| error.message.as_ref().map(|message| message.to_string()))
        .unwrap_or_else(|| "Invalid request body".to_string())
}

/// Numeric `{id}` path segment; anything else is a 400 with the error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                debug!("rejected path: {}", rejection.body_text());
                ApiError::BadRequest("Invalid id".to_string())
            })?;

        Ok(IdPath(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "name and email are required"))]
        name: String,
        #[validate(length(min = 1, message = "name and email are required"))]
        email: String,
        #[validate(range(min = 1, message = "hours must be positive"))]
        hours: i32,
    }

    #[test]
    fn core_errors_keep_their_message_and_status() {
        let error = ApiError::from(CoreError::invalid("invalid subjectId"));
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "invalid subjectId");

        assert_eq!(
            ApiError::from(CoreError::not_found("Teacher not found")).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(CoreError::conflict("taken")).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(CoreError::ServiceUnavailable).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn first_message_is_stable_across_fields() {
        let payload = Payload {
            name: String::new(),
            email: String::new(),
            hours: 0,
        };

        let errors = payload.validate().unwrap_err();
        assert_eq!(first_message(&errors), "name and email are required");
    }
}
