use dnscheck_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::HistoryRepository;

pub struct DeleteHistoryUseCase {
    repository: Arc<dyn HistoryRepository>,
}

impl DeleteHistoryUseCase {
    pub fn new(repository: Arc<dyn HistoryRepository>) -> Self {
        Self { repository }
    }

    /// `record_id` may be a record's flat id or any of its node ids; the
    /// whole record goes either way.
    #[instrument(skip(self))]
    pub async fn execute(&self, record_id: &str) -> Result<(), DomainError> {
        let record_id = record_id.trim();
        if record_id.is_empty() {
            return Err(DomainError::InvalidRequest("Missing record ID".to_string()));
        }

        if !self.repository.delete(record_id).await? {
            return Err(DomainError::NotFound(format!(
                "History record {} not found",
                record_id
            )));
        }

        info!(record_id = %record_id, "History record deleted");
        Ok(())
    }
}
