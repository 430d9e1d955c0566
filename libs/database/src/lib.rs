//! Database library providing the MongoDB connector and collection helpers
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB client, configuration and typed collection operations
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, SortSpec};
//!
//! let config = mongodb::MongoConfig::with_database("mongodb://localhost:27017", "portfolio");
//! let client = mongodb::connect_from_config(&config).await?;
//! let collection = client.database(config.database()).collection::<Document>("consultations");
//! let latest = mongodb::find_many(&collection, doc! {}, Some(SortSpec::descending("timestamp")), 10).await?;
//! ```

#[cfg(feature = "mongodb")]
pub mod mongodb;
