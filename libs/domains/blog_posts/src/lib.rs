//! Blog Posts Domain
//!
//! Articles shown on the portfolio's insights page. Public reads only ever
//! see published posts. An empty collection can be seeded with a fixed set
//! of sample posts, once at startup and on demand.
//!
//! ```rust,no_run
//! use domain_blog_posts::{handlers, mongodb::MongoBlogPostRepository, BlogPostService};
//!
//! # async fn example(db: mongodb::Database) -> Result<(), domain_blog_posts::BlogPostError> {
//! let service = BlogPostService::new(MongoBlogPostRepository::new(&db));
//! let outcome = service.initialize().await?;
//! println!("{}", outcome.message);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod seed;
pub mod service;

pub use error::{BlogPostError, BlogPostResult};
pub use handlers::{ApiDoc, SeedApiDoc};
pub use models::{BlogPost, BlogPostCreate, SeedOutcome};
pub use repository::BlogPostRepository;
pub use service::BlogPostService;
