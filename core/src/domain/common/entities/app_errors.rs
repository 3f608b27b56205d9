use thiserror::Error;

/// Errors surfaced by services and repositories.
///
/// Messages are meant for clients: `InternalServerError` never carries store detail,
/// which is logged where the failure happens instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{0}")]
    Invalid(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    InternalServerError(String),

    #[error("Service unavailable")]
    ServiceUnavailable,
}

impl CoreError {
    pub fn invalid(message: impl Into<String>) -> Self {
        CoreError::Invalid(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        CoreError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        CoreError::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        CoreError::InternalServerError(message.into())
    }
}
