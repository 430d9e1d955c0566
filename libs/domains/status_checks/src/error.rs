use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatusCheckError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type StatusCheckResult<T> = Result<T, StatusCheckError>;

impl StatusCheckError {
    /// Prefix a storage failure with the operation that hit it.
    pub(crate) fn context(self, operation: &str) -> Self {
        match self {
            StatusCheckError::Database(msg) => {
                StatusCheckError::Database(format!("{operation}: {msg}"))
            }
            other => other,
        }
    }
}

impl From<StatusCheckError> for AppError {
    fn from(err: StatusCheckError) -> Self {
        match err {
            StatusCheckError::Validation(msg) => AppError::Validation(msg),
            StatusCheckError::Database(msg) => AppError::Storage(msg),
        }
    }
}

impl IntoResponse for StatusCheckError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for StatusCheckError {
    fn from(err: mongodb::error::Error) -> Self {
        StatusCheckError::Database(err.to_string())
    }
}
