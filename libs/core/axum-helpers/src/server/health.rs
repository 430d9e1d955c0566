use axum::{Json, Router, extract::State, routing::get};
use chrono::{DateTime, Utc};
use core_config::AppInfo;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub version: String,
}

/// Liveness handler. Always 200 while the process is serving; the timestamp
/// is taken per call.
pub async fn health_handler(State(app): State<AppInfo>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        name: app.name.to_string(),
        version: app.version.to_string(),
    })
}

/// Router with a single `/health` route.
///
/// # Example
/// ```ignore
/// let api = Router::new().merge(health_router(app_info!()));
/// ```
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(app_info)
}
