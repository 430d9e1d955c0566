//! MongoDB implementation of ContactMessageRepository

use async_trait::async_trait;
use database::mongodb::{SortSpec, find_many, from_bson_datetime, insert_one, to_bson_datetime};
use mongodb::{
    Collection, Database,
    bson::{self, doc},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ContactMessageResult;
use crate::models::ContactMessage;
use crate::repository::ContactMessageRepository;

pub const COLLECTION: &str = "contact_messages";

#[derive(Debug, Serialize, Deserialize)]
struct ContactMessageDocument {
    id: String,
    name: String,
    email: String,
    subject: String,
    message: String,
    timestamp: bson::DateTime,
}

impl From<ContactMessage> for ContactMessageDocument {
    fn from(message: ContactMessage) -> Self {
        Self {
            id: message.id,
            name: message.name,
            email: message.email,
            subject: message.subject,
            message: message.message,
            timestamp: to_bson_datetime(message.timestamp),
        }
    }
}

impl From<ContactMessageDocument> for ContactMessage {
    fn from(doc: ContactMessageDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            email: doc.email,
            subject: doc.subject,
            message: doc.message,
            timestamp: from_bson_datetime(doc.timestamp),
        }
    }
}

pub struct MongoContactMessageRepository {
    collection: Collection<ContactMessageDocument>,
}

impl MongoContactMessageRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl ContactMessageRepository for MongoContactMessageRepository {
    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn insert(&self, message: ContactMessage) -> ContactMessageResult<ContactMessage> {
        let document = ContactMessageDocument::from(message.clone());
        insert_one(&self.collection, &document).await?;
        Ok(message)
    }

    #[instrument(skip(self))]
    async fn list_newest(&self, limit: i64) -> ContactMessageResult<Vec<ContactMessage>> {
        let documents = find_many(
            &self.collection,
            doc! {},
            Some(SortSpec::descending("timestamp")),
            limit,
        )
        .await?;
        Ok(documents.into_iter().map(ContactMessage::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::mongodb::now_millis;

    fn message() -> ContactMessage {
        ContactMessage {
            id: "m-1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Project".to_string(),
            message: "Let's talk".to_string(),
            timestamp: now_millis(),
        }
    }

    #[test]
    fn test_stored_shape() {
        let message = message();
        let document = bson::to_document(&ContactMessageDocument::from(message.clone())).unwrap();

        assert_eq!(document.get_str("email").unwrap(), "ada@example.com");
        assert_eq!(
            document.get_datetime("timestamp").unwrap().timestamp_millis(),
            message.timestamp.timestamp_millis()
        );
    }

    #[test]
    fn test_document_round_trip() {
        let original = message();
        let document = bson::to_document(&ContactMessageDocument::from(original.clone())).unwrap();
        let restored: ContactMessageDocument = bson::from_document(document).unwrap();
        assert_eq!(ContactMessage::from(restored), original);
    }
}
