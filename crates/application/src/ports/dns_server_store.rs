use async_trait::async_trait;
use dnscheck_domain::DomainError;

#[async_trait]
pub trait DnsServerStore: Send + Sync {
    /// Stored server lines, or the defaults when nothing is stored.
    async fn load(&self) -> Result<Vec<String>, DomainError>;

    async fn save(&self, servers: &[String]) -> Result<(), DomainError>;
}
