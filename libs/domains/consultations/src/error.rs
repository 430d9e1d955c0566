use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsultationError {
    #[error("{0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ConsultationResult<T> = Result<T, ConsultationError>;

impl ConsultationError {
    pub fn not_found() -> Self {
        ConsultationError::NotFound("Consultation not found".to_string())
    }

    /// Prefix a storage failure with the operation that hit it.
    pub(crate) fn context(self, operation: &str) -> Self {
        match self {
            ConsultationError::Database(msg) => {
                ConsultationError::Database(format!("{operation}: {msg}"))
            }
            other => other,
        }
    }
}

impl From<ConsultationError> for AppError {
    fn from(err: ConsultationError) -> Self {
        match err {
            ConsultationError::NotFound(msg) => AppError::NotFound(msg),
            ConsultationError::Validation(msg) => AppError::Validation(msg),
            ConsultationError::Database(msg) => AppError::Storage(msg),
        }
    }
}

impl IntoResponse for ConsultationError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ConsultationError {
    fn from(err: mongodb::error::Error) -> Self {
        ConsultationError::Database(err.to_string())
    }
}
