//! API routes
//!
//! Everything here is nested under `/api` by `axum_helpers::create_router`.

pub mod blog_posts;
pub mod consultations;
pub mod contact_messages;
pub mod health;
pub mod status_checks;

use axum::{Json, Router, routing::get};
use axum_helpers::health_router;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

pub const ROOT_MESSAGE: &str = "Datxoc Portfolio API is running";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/status", status_checks::router(state))
        .nest("/consultations", consultations::router(state))
        .nest("/analytics", consultations::analytics_router(state))
        .nest("/blog-posts", blog_posts::router(state))
        .nest("/contact", contact_messages::router(state))
        .merge(blog_posts::initialize_router(state))
        .merge(health_router(state.config.app))
        .merge(health::router(state.clone()))
}

/// Service banner
#[utoipa::path(
    get,
    path = "/api",
    tag = "System",
    responses(
        (status = 200, description = "Service is running", body = RootResponse)
    )
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE.to_string(),
    })
}
