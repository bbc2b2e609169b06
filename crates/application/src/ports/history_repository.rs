use async_trait::async_trait;
use dnscheck_domain::{DomainError, HistoryRecord, TimeNode};

#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Adds `node` to the record keyed by the sorted domain list, creating
    /// the record when needed, moves it to the front and keeps at most
    /// `max_records` records.
    async fn record(
        &self,
        domains: &[String],
        dns_servers: &[String],
        node: TimeNode,
        max_records: usize,
    ) -> Result<(), DomainError>;

    /// Most recently used first; nodes newest first.
    async fn list(&self) -> Result<Vec<HistoryRecord>, DomainError>;

    /// Deletes the record owning the node `id`. Returns false when nothing
    /// matched.
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;

    async fn clear(&self) -> Result<u64, DomainError>;
}
