pub mod handlers;
pub mod responses;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Body of every error response.
///
/// ```json
/// {
///   "error": "NotFound",
///   "detail": "Consultation not found"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error category: `ValidationError`, `NotFound` or `StorageError`
    pub error: String,
    /// Human-readable description of what went wrong
    pub detail: String,
    /// Offending fields and the rules they broke, for validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub fields: Option<Value>,
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    /// Request body could not be parsed into the expected shape
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    /// Request body parsed but broke a field rule
    #[error("Validation error: {0}")]
    ValidationFields(#[from] ValidationErrors),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    /// Persistence layer failure; the message is surfaced to the client
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(rejection) => rejection.status(),
            AppError::ValidationFields(_) | AppError::Validation(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (error, detail, fields) = match self {
            AppError::JsonExtractorRejection(rejection) => {
                tracing::info!("JSON extraction error: {}", rejection.body_text());
                ("ValidationError", rejection.body_text(), None)
            }
            AppError::ValidationFields(errors) => {
                tracing::info!("Validation error: {}", errors);
                (
                    "ValidationError",
                    "Request validation failed".to_string(),
                    Some(field_errors(&errors)),
                )
            }
            AppError::Validation(msg) => {
                tracing::info!("Validation error: {}", msg);
                ("ValidationError", msg, None)
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                ("NotFound", msg, None)
            }
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {}", msg);
                ("StorageError", msg, None)
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            detail,
            fields,
        });

        (status, body).into_response()
    }
}

/// Flatten validator output into `{ "field": [{ "code": ..., "message": ... }] }`.
fn field_errors(errors: &ValidationErrors) -> Value {
    let fields = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let entries: Vec<Value> = errors
                .iter()
                .map(|err| {
                    json!({
                        "code": err.code,
                        "message": err.message,
                    })
                })
                .collect();
            (field.to_string(), Value::Array(entries))
        })
        .collect::<Map<_, _>>();

    Value::Object(fields)
}
