use async_trait::async_trait;

use crate::error::ContactMessageResult;
use crate::models::ContactMessage;

/// Storage for contact messages
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn insert(&self, message: ContactMessage) -> ContactMessageResult<ContactMessage>;

    /// Newest first, at most `limit` records
    async fn list_newest(&self, limit: i64) -> ContactMessageResult<Vec<ContactMessage>>;
}
