//! Aggregations over the consultations collection.
//!
//! Pipelines are plain data so their shape can be checked without a server;
//! the repository runs them and deserializes the rows into the types below.

use chrono::{DateTime, Duration, Utc};
use database::mongodb::to_bson_datetime;
use mongodb::bson::{Document, doc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Upper bound on rows returned by each grouping.
pub const GROUP_LIMIT: i64 = 100;

/// Trailing window covered by the daily trend.
pub const TREND_WINDOW_DAYS: i64 = 30;

/// One bucket of a `$group` by a string field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroupCount {
    /// Grouped field value; `null` for records missing the field
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TrendDay {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

/// Consultations received on one calendar day (UTC)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrendBucket {
    #[serde(rename = "_id")]
    pub id: TrendDay,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConsultationAnalytics {
    pub total_consultations: u64,
    /// Sorted by count, largest first
    pub industry_breakdown: Vec<GroupCount>,
    /// Sorted by count, largest first
    pub business_size_breakdown: Vec<GroupCount>,
    /// Last 30 days, oldest day first
    pub recent_trend: Vec<TrendBucket>,
}

fn breakdown_pipeline(field_path: &str) -> Vec<Document> {
    vec![
        doc! { "$group": { "_id": field_path, "count": { "$sum": 1 } } },
        doc! { "$sort": { "count": -1 } },
    ]
}

pub fn industry_pipeline() -> Vec<Document> {
    breakdown_pipeline("$industry")
}

pub fn business_size_pipeline() -> Vec<Document> {
    breakdown_pipeline("$businessSize")
}

/// Daily counts of consultations at or after `since`.
pub fn trend_pipeline(since: DateTime<Utc>) -> Vec<Document> {
    vec![
        doc! { "$match": { "timestamp": { "$gte": to_bson_datetime(since) } } },
        doc! {
            "$group": {
                "_id": {
                    "year": { "$year": "$timestamp" },
                    "month": { "$month": "$timestamp" },
                    "day": { "$dayOfMonth": "$timestamp" }
                },
                "count": { "$sum": 1 }
            }
        },
        doc! { "$sort": { "_id": 1 } },
    ]
}

/// Start of the trend window relative to `now`.
pub fn trend_since(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(TREND_WINDOW_DAYS)
}
