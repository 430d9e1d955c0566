//! Status Checks Domain
//!
//! Records which client pinged the service and when. The simplest of the
//! portfolio domains and the one the frontend uses as a connectivity probe.
//!
//! ```rust,no_run
//! use domain_status_checks::{handlers, mongodb::MongoStatusCheckRepository, StatusCheckService};
//!
//! # fn example(db: mongodb::Database) {
//! let service = StatusCheckService::new(MongoStatusCheckRepository::new(&db));
//! let router = handlers::router(service);
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{StatusCheckError, StatusCheckResult};
pub use handlers::ApiDoc;
pub use models::{StatusCheck, StatusCheckCreate};
pub use repository::StatusCheckRepository;
pub use service::StatusCheckService;
