//! Contact Messages Domain
//!
//! Messages left through the site's contact form. Append-only; listed newest
//! first.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{ContactMessageError, ContactMessageResult};
pub use handlers::ApiDoc;
pub use models::{ContactMessage, ContactMessageCreate};
pub use repository::ContactMessageRepository;
pub use service::ContactMessageService;
