use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::analytics::{GroupCount, TrendBucket};
use crate::error::ConsultationResult;
use crate::models::ConsultationRequest;

/// Storage and aggregation access for consultation requests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConsultationRepository: Send + Sync {
    async fn insert(
        &self,
        request: ConsultationRequest,
    ) -> ConsultationResult<ConsultationRequest>;

    /// Newest first, at most `limit` records
    async fn list_newest(&self, limit: i64) -> ConsultationResult<Vec<ConsultationRequest>>;

    async fn find_by_id(&self, id: &str) -> ConsultationResult<Option<ConsultationRequest>>;

    async fn count_all(&self) -> ConsultationResult<u64>;

    async fn industry_breakdown(&self, limit: i64) -> ConsultationResult<Vec<GroupCount>>;

    async fn business_size_breakdown(&self, limit: i64) -> ConsultationResult<Vec<GroupCount>>;

    /// Per-day counts for records at or after `since`, oldest day first
    async fn daily_trend(
        &self,
        since: DateTime<Utc>,
        limit: i64,
    ) -> ConsultationResult<Vec<TrendBucket>>;
}
