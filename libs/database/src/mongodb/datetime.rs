//! Conversions between `chrono` timestamps and BSON dates.
//!
//! Entities expose `DateTime<Utc>` (RFC 3339 in JSON) while documents store a
//! native BSON date so aggregation date operators (`$year`, `$dayOfMonth`)
//! work on them. BSON dates have millisecond precision.

use chrono::{DateTime, SubsecRound, Utc};
use mongodb::bson;

pub fn to_bson_datetime(value: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}

pub fn from_bson_datetime(value: bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

/// Current UTC instant truncated to what a BSON date can hold, so a record
/// returned from a create compares equal to the same record read back.
pub fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}
