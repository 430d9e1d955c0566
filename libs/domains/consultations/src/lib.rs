//! Consultations Domain
//!
//! AI-readiness consultation requests submitted from the portfolio site, and
//! the analytics computed over them.
//!
//! ```text
//! handlers ──► ConsultationService ──► ConsultationRepository ──► MongoDB
//!                     │
//!                     └── analytics (pipeline builders + response types)
//! ```
//!
//! ```rust,no_run
//! use domain_consultations::{handlers, mongodb::MongoConsultationRepository, ConsultationService};
//!
//! # fn example(db: mongodb::Database) {
//! let records = handlers::router(ConsultationService::new(MongoConsultationRepository::new(&db)));
//! let analytics = handlers::analytics_router(ConsultationService::new(
//!     MongoConsultationRepository::new(&db),
//! ));
//! # }
//! ```

pub mod analytics;
pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use analytics::{ConsultationAnalytics, GroupCount, TrendBucket, TrendDay};
pub use error::{ConsultationError, ConsultationResult};
pub use handlers::{AnalyticsApiDoc, ApiDoc};
pub use models::{AnalysisValue, ConsultationCreate, ConsultationRequest};
pub use repository::ConsultationRepository;
pub use service::ConsultationService;
