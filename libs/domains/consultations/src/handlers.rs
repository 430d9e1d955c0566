use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{NotFoundResponse, StorageErrorResponse, ValidationErrorResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::analytics::{ConsultationAnalytics, GroupCount, TrendBucket, TrendDay};
use crate::error::ConsultationResult;
use crate::models::{ConsultationCreate, ConsultationRequest};
use crate::repository::ConsultationRepository;
use crate::service::ConsultationService;

/// OpenAPI documentation for the consultation endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_consultations, create_consultation, get_consultation),
    components(
        schemas(ConsultationRequest, ConsultationCreate),
        responses(NotFoundResponse, StorageErrorResponse, ValidationErrorResponse)
    ),
    tags(
        (name = "Consultations", description = "AI consultation requests")
    )
)]
pub struct ApiDoc;

/// OpenAPI documentation for consultation analytics
#[derive(OpenApi)]
#[openapi(
    paths(consultation_analytics),
    components(
        schemas(ConsultationAnalytics, GroupCount, TrendBucket, TrendDay),
        responses(StorageErrorResponse)
    ),
    tags(
        (name = "Analytics", description = "Aggregates over consultation requests")
    )
)]
pub struct AnalyticsApiDoc;

pub fn router<R: ConsultationRepository + 'static>(service: ConsultationService<R>) -> Router {
    Router::new()
        .route("/", get(list_consultations).post(create_consultation))
        .route("/{id}", get(get_consultation))
        .with_state(Arc::new(service))
}

/// Routes mounted under the analytics prefix
pub fn analytics_router<R: ConsultationRepository + 'static>(
    service: ConsultationService<R>,
) -> Router {
    Router::new()
        .route("/consultations", get(consultation_analytics))
        .with_state(Arc::new(service))
}

/// List consultation requests, newest first
#[utoipa::path(
    get,
    path = "",
    tag = "Consultations",
    responses(
        (status = 200, description = "Consultation requests", body = Vec<ConsultationRequest>),
        (status = 500, response = StorageErrorResponse)
    )
)]
async fn list_consultations<R: ConsultationRepository>(
    State(service): State<Arc<ConsultationService<R>>>,
) -> ConsultationResult<Json<Vec<ConsultationRequest>>> {
    let requests = service.list_consultations().await?;
    Ok(Json(requests))
}

/// Submit a consultation request
#[utoipa::path(
    post,
    path = "",
    tag = "Consultations",
    request_body = ConsultationCreate,
    responses(
        (status = 200, description = "Consultation request stored", body = ConsultationRequest),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = StorageErrorResponse)
    )
)]
async fn create_consultation<R: ConsultationRepository>(
    State(service): State<Arc<ConsultationService<R>>>,
    ValidatedJson(input): ValidatedJson<ConsultationCreate>,
) -> ConsultationResult<Json<ConsultationRequest>> {
    let request = service.create_consultation(input).await?;
    Ok(Json(request))
}

/// Get a consultation request by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Consultations",
    params(
        ("id" = String, Path, description = "Consultation ID")
    ),
    responses(
        (status = 200, description = "Consultation request found", body = ConsultationRequest),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = StorageErrorResponse)
    )
)]
async fn get_consultation<R: ConsultationRepository>(
    State(service): State<Arc<ConsultationService<R>>>,
    Path(id): Path<String>,
) -> ConsultationResult<Json<ConsultationRequest>> {
    let request = service.get_consultation(&id).await?;
    Ok(Json(request))
}

/// Consultation totals, breakdowns and 30-day trend
#[utoipa::path(
    get,
    path = "/consultations",
    tag = "Analytics",
    responses(
        (status = 200, description = "Aggregated consultation analytics", body = ConsultationAnalytics),
        (status = 500, response = StorageErrorResponse)
    )
)]
async fn consultation_analytics<R: ConsultationRepository>(
    State(service): State<Arc<ConsultationService<R>>>,
) -> ConsultationResult<Json<ConsultationAnalytics>> {
    let analytics = service.analytics().await?;
    Ok(Json(analytics))
}
