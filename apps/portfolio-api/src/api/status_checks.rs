use axum::Router;
use domain_status_checks::{StatusCheckService, handlers, mongodb::MongoStatusCheckRepository};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoStatusCheckRepository::new(&state.db);
    handlers::router(StatusCheckService::new(repository))
}
