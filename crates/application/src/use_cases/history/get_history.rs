use dnscheck_domain::{DomainError, HistoryRecord};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::HistoryRepository;

pub struct GetHistoryUseCase {
    repository: Arc<dyn HistoryRepository>,
}

impl GetHistoryUseCase {
    pub fn new(repository: Arc<dyn HistoryRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<HistoryRecord>, DomainError> {
        self.repository.list().await
    }
}
