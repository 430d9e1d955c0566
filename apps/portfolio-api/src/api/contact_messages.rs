use axum::Router;
use domain_contact_messages::{
    ContactMessageService, handlers, mongodb::MongoContactMessageRepository,
};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoContactMessageRepository::new(&state.db);
    handlers::router(ContactMessageService::new(repository))
}
