use async_trait::async_trait;

use crate::error::StatusCheckResult;
use crate::models::StatusCheck;

/// Storage for status checks
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusCheckRepository: Send + Sync {
    /// Persist a fully built record and hand it back
    async fn insert(&self, check: StatusCheck) -> StatusCheckResult<StatusCheck>;

    /// Records in natural (insertion) order, at most `limit` of them
    async fn list(&self, limit: i64) -> StatusCheckResult<Vec<StatusCheck>>;
}
