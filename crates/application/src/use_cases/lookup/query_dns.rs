use dnscheck_domain::record_set::placeholder;
use dnscheck_domain::{
    normalize_domains, DomainError, DomainResultSet, RecordType, RecordValue, ServerEntry,
    ServerRecords,
};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::DnsLookupPort;
use crate::services::QueryProgressTracker;

pub const DEFAULT_MAX_CONCURRENCY: usize = 20;

/// Asks every server about every domain and collects the answers side by
/// side.
pub struct QueryDnsUseCase {
    lookup: Arc<dyn DnsLookupPort>,
    progress: Arc<QueryProgressTracker>,
    max_concurrency: usize,
}

impl QueryDnsUseCase {
    pub fn new(lookup: Arc<dyn DnsLookupPort>, progress: Arc<QueryProgressTracker>) -> Self {
        Self {
            lookup,
            progress,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    /// Domains are normalized first; none left is `NoValidDomains`. Server
    /// lines that are only whitespace are ignored.
    #[instrument(skip(self, domains, servers), fields(domains = domains.len(), servers = servers.len()))]
    pub async fn execute(
        &self,
        domains: &[String],
        servers: &[String],
    ) -> Result<DomainResultSet, DomainError> {
        let domains = normalize_domains(domains);
        if domains.is_empty() {
            return Err(DomainError::NoValidDomains);
        }

        let servers: Vec<ServerEntry> = servers
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| ServerEntry::parse(line))
            .collect();

        let total = domains.len() * servers.len();
        self.progress.reset(total);

        let mut results: DomainResultSet = domains
            .iter()
            .map(|domain| (domain.clone(), Default::default()))
            .collect();

        if total == 0 {
            self.progress.mark_completed();
            return Ok(results);
        }

        // Owned pairs keep the fan-out future `Send` for the HTTP handler.
        let tasks: Vec<(String, ServerEntry)> = domains
            .iter()
            .flat_map(|domain| {
                servers
                    .iter()
                    .map(move |server| (domain.clone(), server.clone()))
            })
            .collect();

        let mut answers = stream::iter(tasks)
            .map(|(domain, server)| async move {
                let records = self.query_server(&domain, &server).await;
                self.progress.increment();
                (domain, server, records)
            })
            .buffer_unordered(self.max_concurrency.min(total));

        while let Some((domain, server, records)) = answers.next().await {
            if let Some(by_server) = results.get_mut(&domain) {
                by_server.insert(server.id().to_string(), records);
            }
        }

        self.progress.mark_completed();
        info!(domains = domains.len(), tasks = total, "DNS comparison finished");

        Ok(results)
    }

    async fn query_server(&self, domain: &str, server: &ServerEntry) -> ServerRecords {
        if server.is_blank() {
            return ServerRecords::default();
        }
        if server.socket_addr().is_err() {
            debug!(server = %server, "Skipping unparseable server address");
            return ServerRecords::new(placeholder::INVALID_SERVER, placeholder::INVALID_SERVER);
        }

        let a = self.query_record(domain, server, RecordType::A).await;
        let cname = self.query_record(domain, server, RecordType::CNAME).await;
        ServerRecords::new(a, cname)
    }

    async fn query_record(
        &self,
        domain: &str,
        server: &ServerEntry,
        record_type: RecordType,
    ) -> RecordValue {
        match self.lookup.lookup(server, domain, record_type).await {
            Ok(values) if values.is_empty() => placeholder::no_answer(record_type).into(),
            Ok(mut values) => {
                if record_type == RecordType::A {
                    values.sort();
                }
                values.into()
            }
            Err(e) => {
                debug!(server = %server, domain = %domain, record_type = %record_type, error = %e, "Lookup failed");
                lookup_failure(&e).into()
            }
        }
    }
}

fn lookup_failure(error: &DomainError) -> String {
    match error {
        DomainError::NxDomain => placeholder::NXDOMAIN.to_string(),
        DomainError::QueryTimeout => placeholder::TIMEOUT.to_string(),
        DomainError::InvalidServerAddress(_) => placeholder::INVALID_SERVER.to_string(),
        DomainError::TransportError { reason, .. } => placeholder::error(reason),
        DomainError::InvalidDnsResponse(reason) => placeholder::error(reason),
        other => placeholder::error(other),
    }
}
