use dnscheck_domain::{DomainError, DomainResultSet, TimeNode};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::HistoryRepository;

pub const DEFAULT_MAX_RECORDS: usize = 30;

pub struct RecordHistoryUseCase {
    repository: Arc<dyn HistoryRepository>,
    max_records: usize,
}

impl RecordHistoryUseCase {
    pub fn new(repository: Arc<dyn HistoryRepository>) -> Self {
        Self {
            repository,
            max_records: DEFAULT_MAX_RECORDS,
        }
    }

    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.max_records = max_records.max(1);
        self
    }

    #[instrument(skip(self, results))]
    pub async fn execute(
        &self,
        domains: &[String],
        dns_servers: &[String],
        results: DomainResultSet,
    ) -> Result<(), DomainError> {
        let node = TimeNode::now(results);
        let node_id = node.id.clone();

        self.repository
            .record(domains, dns_servers, node, self.max_records)
            .await?;

        debug!(node_id = %node_id, "Query recorded in history");
        Ok(())
    }
}
