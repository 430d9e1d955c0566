use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{StorageErrorResponse, ValidationErrorResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::StatusCheckResult;
use crate::models::{StatusCheck, StatusCheckCreate};
use crate::repository::StatusCheckRepository;
use crate::service::StatusCheckService;

#[derive(OpenApi)]
#[openapi(
    paths(list_status_checks, create_status_check),
    components(
        schemas(StatusCheck, StatusCheckCreate),
        responses(StorageErrorResponse, ValidationErrorResponse)
    ),
    tags(
        (name = "Status", description = "Client status checks")
    )
)]
pub struct ApiDoc;

pub fn router<R: StatusCheckRepository + 'static>(service: StatusCheckService<R>) -> Router {
    Router::new()
        .route("/", get(list_status_checks).post(create_status_check))
        .with_state(Arc::new(service))
}

/// List recorded status checks
#[utoipa::path(
    get,
    path = "",
    tag = "Status",
    responses(
        (status = 200, description = "Status checks in insertion order", body = Vec<StatusCheck>),
        (status = 500, response = StorageErrorResponse)
    )
)]
async fn list_status_checks<R: StatusCheckRepository>(
    State(service): State<Arc<StatusCheckService<R>>>,
) -> StatusCheckResult<Json<Vec<StatusCheck>>> {
    let checks = service.list_status_checks().await?;
    Ok(Json(checks))
}

/// Record a status check
#[utoipa::path(
    post,
    path = "",
    tag = "Status",
    request_body = StatusCheckCreate,
    responses(
        (status = 200, description = "Status check recorded", body = StatusCheck),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = StorageErrorResponse)
    )
)]
async fn create_status_check<R: StatusCheckRepository>(
    State(service): State<Arc<StatusCheckService<R>>>,
    ValidatedJson(input): ValidatedJson<StatusCheckCreate>,
) -> StatusCheckResult<Json<StatusCheck>> {
    let check = service.create_status_check(input).await?;
    Ok(Json(check))
}
