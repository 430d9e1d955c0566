//! Shared application state.
//!
//! Built once in `main`; repositories are constructed from `db` when the
//! routes are wired, and the client is dropped during shutdown cleanup.

use mongodb::{Client, Database};

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// Pooled client; clones share connections
    pub mongo_client: Client,
    pub db: Database,
}
