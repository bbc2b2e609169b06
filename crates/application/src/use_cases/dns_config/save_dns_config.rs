use dnscheck_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::DnsServerStore;

pub struct SaveDnsConfigUseCase {
    store: Arc<dyn DnsServerStore>,
}

impl SaveDnsConfigUseCase {
    pub fn new(store: Arc<dyn DnsServerStore>) -> Self {
        Self { store }
    }

    /// Blank lines are dropped; nothing left is `EmptyServerList`.
    #[instrument(skip(self))]
    pub async fn execute(&self, servers: &[String]) -> Result<Vec<String>, DomainError> {
        let servers: Vec<String> = servers
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        if servers.is_empty() {
            return Err(DomainError::EmptyServerList);
        }

        self.store.save(&servers).await?;
        info!(count = servers.len(), "DNS server list saved");

        Ok(servers)
    }
}
