use database::mongodb::MAX_FETCH;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{StatusCheckError, StatusCheckResult};
use crate::models::{StatusCheck, StatusCheckCreate};
use crate::repository::StatusCheckRepository;

pub struct StatusCheckService<R: StatusCheckRepository> {
    repository: Arc<R>,
}

impl<R: StatusCheckRepository> StatusCheckService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(client_name = %input.client_name))]
    pub async fn create_status_check(
        &self,
        input: StatusCheckCreate,
    ) -> StatusCheckResult<StatusCheck> {
        input
            .validate()
            .map_err(|e| StatusCheckError::Validation(e.to_string()))?;

        let check = self
            .repository
            .insert(StatusCheck::new(input))
            .await
            .map_err(|e| e.context("Error creating status check"))?;

        tracing::info!(id = %check.id, "Status check recorded");
        Ok(check)
    }

    #[instrument(skip(self))]
    pub async fn list_status_checks(&self) -> StatusCheckResult<Vec<StatusCheck>> {
        self.repository
            .list(MAX_FETCH)
            .await
            .map_err(|e| e.context("Error fetching status checks"))
    }
}
