//! MongoDB implementation of StatusCheckRepository

use async_trait::async_trait;
use database::mongodb::{find_many, from_bson_datetime, insert_one, to_bson_datetime};
use mongodb::{
    Collection, Database,
    bson::{self, doc},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::StatusCheckResult;
use crate::models::StatusCheck;
use crate::repository::StatusCheckRepository;

pub const COLLECTION: &str = "status_checks";

/// Stored shape; the timestamp is a native BSON date.
#[derive(Debug, Serialize, Deserialize)]
struct StatusCheckDocument {
    id: String,
    client_name: String,
    timestamp: bson::DateTime,
}

impl From<StatusCheck> for StatusCheckDocument {
    fn from(check: StatusCheck) -> Self {
        Self {
            id: check.id,
            client_name: check.client_name,
            timestamp: to_bson_datetime(check.timestamp),
        }
    }
}

impl From<StatusCheckDocument> for StatusCheck {
    fn from(doc: StatusCheckDocument) -> Self {
        Self {
            id: doc.id,
            client_name: doc.client_name,
            timestamp: from_bson_datetime(doc.timestamp),
        }
    }
}

pub struct MongoStatusCheckRepository {
    collection: Collection<StatusCheckDocument>,
}

impl MongoStatusCheckRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl StatusCheckRepository for MongoStatusCheckRepository {
    #[instrument(skip(self, check), fields(check_id = %check.id))]
    async fn insert(&self, check: StatusCheck) -> StatusCheckResult<StatusCheck> {
        let document = StatusCheckDocument::from(check.clone());
        insert_one(&self.collection, &document).await?;
        Ok(check)
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: i64) -> StatusCheckResult<Vec<StatusCheck>> {
        let documents = find_many(&self.collection, doc! {}, None, limit).await?;
        Ok(documents.into_iter().map(StatusCheck::from).collect())
    }
}
