//! Blog routes and sample-post seeding

use axum::Router;
use domain_blog_posts::{BlogPostService, handlers, mongodb::MongoBlogPostRepository};
use tracing::{error, info};

use crate::state::AppState;

fn service(state: &AppState) -> BlogPostService<MongoBlogPostRepository> {
    BlogPostService::new(MongoBlogPostRepository::new(&state.db))
}

pub fn router(state: &AppState) -> Router {
    handlers::router(service(state))
}

pub fn initialize_router(state: &AppState) -> Router {
    handlers::initialize_router(service(state))
}

/// Seed sample posts on startup. Failures are logged and do not stop the
/// server; `POST /api/initialize-blog` can retry later.
pub async fn seed_on_startup(state: &AppState) {
    match service(state).initialize().await {
        Ok(outcome) => info!(inserted = outcome.inserted(), "{}", outcome.message),
        Err(e) => error!("Startup blog seeding failed: {}", e),
    }
}
