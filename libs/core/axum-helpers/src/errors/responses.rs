//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Storage Error",
    content_type = "application/json",
    example = json!({
        "error": "StorageError",
        "detail": "Error fetching consultations: connection refused"
    })
)]
pub struct StorageErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unprocessable Entity - Validation Error",
    content_type = "application/json",
    example = json!({
        "error": "ValidationError",
        "detail": "Request validation failed",
        "fields": {
            "industry": [{
                "code": "length",
                "message": null
            }]
        }
    })
)]
pub struct ValidationErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Not Found",
    content_type = "application/json",
    example = json!({
        "error": "NotFound",
        "detail": "Blog post not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
