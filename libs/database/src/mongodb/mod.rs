//! MongoDB database connector and utilities
//!
//! Provides connection management, health checks and the typed collection
//! operations that domain repositories are built from.

mod collection;
mod config;
mod connector;
mod datetime;
mod health;

pub use collection::{
    MAX_FETCH, SortDirection, SortSpec, aggregate, clamp_limit, count, find_many, find_one,
    insert_many, insert_one,
};
pub use config::MongoConfig;
pub use connector::{MongoError, connect_from_config};
pub use datetime::{from_bson_datetime, now_millis, to_bson_datetime};
pub use health::check_health;

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
