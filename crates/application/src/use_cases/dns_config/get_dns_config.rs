use dnscheck_domain::DomainError;
use std::sync::Arc;
use tracing::instrument;

use crate::ports::DnsServerStore;

pub struct GetDnsConfigUseCase {
    store: Arc<dyn DnsServerStore>,
}

impl GetDnsConfigUseCase {
    pub fn new(store: Arc<dyn DnsServerStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<String>, DomainError> {
        self.store.load().await
    }
}
