use database::mongodb::MAX_FETCH;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ContactMessageError, ContactMessageResult};
use crate::models::{ContactMessage, ContactMessageCreate};
use crate::repository::ContactMessageRepository;

pub struct ContactMessageService<R: ContactMessageRepository> {
    repository: Arc<R>,
}

impl<R: ContactMessageRepository> ContactMessageService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(subject = %input.subject))]
    pub async fn create_contact_message(
        &self,
        input: ContactMessageCreate,
    ) -> ContactMessageResult<ContactMessage> {
        input
            .validate()
            .map_err(|e| ContactMessageError::Validation(e.to_string()))?;

        let message = self
            .repository
            .insert(ContactMessage::new(input))
            .await
            .map_err(|e| e.context("Error creating contact message"))?;

        tracing::info!(id = %message.id, "Contact message stored");
        Ok(message)
    }

    #[instrument(skip(self))]
    pub async fn list_contact_messages(&self) -> ContactMessageResult<Vec<ContactMessage>> {
        self.repository
            .list_newest(MAX_FETCH)
            .await
            .map_err(|e| e.context("Error fetching contact messages"))
    }
}
