//! Readiness endpoint

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReadinessResponse {
    /// `ready` or `unhealthy`
    pub status: String,
    pub mongodb: bool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check: pings MongoDB
#[utoipa::path(
    get,
    path = "/api/ready",
    tag = "System",
    responses(
        (status = 200, description = "MongoDB reachable", body = ReadinessResponse),
        (status = 503, description = "MongoDB unreachable", body = ReadinessResponse)
    )
)]
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let mongodb_healthy = match database::mongodb::check_health(&state.mongo_client).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "MongoDB readiness ping failed");
            false
        }
    };

    let (status, label) = if mongodb_healthy {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (
        status,
        Json(ReadinessResponse {
            status: label.to_string(),
            mongodb: mongodb_healthy,
        }),
    )
}
