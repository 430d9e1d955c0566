//! Consultation routes and the analytics built on the same collection

use axum::Router;
use domain_consultations::{
    ConsultationService, handlers, mongodb::MongoConsultationRepository,
};

use crate::state::AppState;

fn service(state: &AppState) -> ConsultationService<MongoConsultationRepository> {
    ConsultationService::new(MongoConsultationRepository::new(&state.db))
}

pub fn router(state: &AppState) -> Router {
    handlers::router(service(state))
}

pub fn analytics_router(state: &AppState) -> Router {
    handlers::analytics_router(service(state))
}
