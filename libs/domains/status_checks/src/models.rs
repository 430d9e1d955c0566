use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A recorded status check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusCheck {
    /// Server-generated UUID v4
    pub id: String,
    pub client_name: String,
    /// Server-assigned creation time
    pub timestamp: DateTime<Utc>,
}

/// Request body for recording a status check
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct StatusCheckCreate {
    #[validate(length(min = 1))]
    pub client_name: String,
}

impl StatusCheck {
    pub fn new(input: StatusCheckCreate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name: input.client_name,
            timestamp: database::mongodb::now_millis(),
        }
    }
}
