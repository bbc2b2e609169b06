use dnscheck_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::HistoryRepository;

pub struct ClearHistoryUseCase {
    repository: Arc<dyn HistoryRepository>,
}

impl ClearHistoryUseCase {
    pub fn new(repository: Arc<dyn HistoryRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<u64, DomainError> {
        let removed = self.repository.clear().await?;
        info!(removed, "History cleared");
        Ok(removed)
    }
}
