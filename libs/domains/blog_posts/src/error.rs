use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlogPostError {
    #[error("{0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type BlogPostResult<T> = Result<T, BlogPostError>;

impl BlogPostError {
    pub fn not_found() -> Self {
        BlogPostError::NotFound("Blog post not found".to_string())
    }

    pub(crate) fn context(self, operation: &str) -> Self {
        match self {
            BlogPostError::Database(msg) => BlogPostError::Database(format!("{operation}: {msg}")),
            other => other,
        }
    }
}

impl From<BlogPostError> for AppError {
    fn from(err: BlogPostError) -> Self {
        match err {
            BlogPostError::NotFound(msg) => AppError::NotFound(msg),
            BlogPostError::Validation(msg) => AppError::Validation(msg),
            BlogPostError::Database(msg) => AppError::Storage(msg),
        }
    }
}

impl IntoResponse for BlogPostError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for BlogPostError {
    fn from(err: mongodb::error::Error) -> Self {
        BlogPostError::Database(err.to_string())
    }
}
