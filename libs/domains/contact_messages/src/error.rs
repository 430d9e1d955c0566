use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactMessageError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ContactMessageResult<T> = Result<T, ContactMessageError>;

impl ContactMessageError {
    pub(crate) fn context(self, operation: &str) -> Self {
        match self {
            ContactMessageError::Database(msg) => {
                ContactMessageError::Database(format!("{operation}: {msg}"))
            }
            other => other,
        }
    }
}

impl From<ContactMessageError> for AppError {
    fn from(err: ContactMessageError) -> Self {
        match err {
            ContactMessageError::Validation(msg) => AppError::Validation(msg),
            ContactMessageError::Database(msg) => AppError::Storage(msg),
        }
    }
}

impl IntoResponse for ContactMessageError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ContactMessageError {
    fn from(err: mongodb::error::Error) -> Self {
        ContactMessageError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_database_error_maps_to_500() {
        let response = ContactMessageError::Database("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_error_maps_to_422() {
        let response = ContactMessageError::Validation("email".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_context_only_touches_storage_errors() {
        let err = ContactMessageError::Validation("bad".to_string()).context("Error creating");
        assert!(matches!(err, ContactMessageError::Validation(msg) if msg == "bad"));
    }
}
