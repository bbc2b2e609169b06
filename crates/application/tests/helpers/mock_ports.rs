use async_trait::async_trait;
use dnscheck_application::ports::{DnsLookupPort, DnsServerStore, HistoryRepository};
use dnscheck_domain::{history_key, DomainError, HistoryRecord, RecordType, ServerEntry, TimeNode};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

type LookupKey = (String, String, RecordType);

#[derive(Clone, Default)]
pub struct MockDnsLookup {
    answers: Arc<RwLock<HashMap<LookupKey, Result<Vec<String>, DomainError>>>>,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl MockDnsLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub async fn set_answer(&self, server: &str, domain: &str, record_type: RecordType, values: &[&str]) {
        self.answers.write().await.insert(
            (server.to_string(), domain.to_string(), record_type),
            Ok(values.iter().map(|v| v.to_string()).collect()),
        );
    }

    pub async fn set_error(&self, server: &str, domain: &str, record_type: RecordType, error: DomainError) {
        self.answers
            .write()
            .await
            .insert((server.to_string(), domain.to_string(), record_type), Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsLookupPort for MockDnsLookup {
    async fn lookup(
        &self,
        server: &ServerEntry,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let answer = self
            .answers
            .read()
            .await
            .get(&(server.address().to_string(), domain.to_string(), record_type))
            .cloned()
            .unwrap_or_else(|| Ok(vec![]));

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        answer
    }
}

#[derive(Clone, Default)]
pub struct MockDnsServerStore {
    servers: Arc<RwLock<Option<Vec<String>>>>,
    fail_saves: bool,
}

impl MockDnsServerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub async fn stored(&self) -> Option<Vec<String>> {
        self.servers.read().await.clone()
    }
}

#[async_trait]
impl DnsServerStore for MockDnsServerStore {
    async fn load(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.servers.read().await.clone().unwrap_or_else(|| {
            dnscheck_domain::config::DEFAULT_DNS_SERVERS
                .iter()
                .map(|s| s.to_string())
                .collect()
        }))
    }

    async fn save(&self, servers: &[String]) -> Result<(), DomainError> {
        if self.fail_saves {
            return Err(DomainError::IoError("read-only".to_string()));
        }
        *self.servers.write().await = Some(servers.to_vec());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockHistoryRepository {
    records: Arc<RwLock<Vec<HistoryRecord>>>,
}

impl MockHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl HistoryRepository for MockHistoryRepository {
    async fn record(
        &self,
        domains: &[String],
        dns_servers: &[String],
        node: TimeNode,
        max_records: usize,
    ) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        let key = history_key(domains);

        let mut record = match records.iter().position(|r| r.key() == key) {
            Some(index) => records.remove(index),
            None => HistoryRecord {
                domains: domains.to_vec(),
                dns_servers: vec![],
                date: String::new(),
                time: String::new(),
                timestamp: String::new(),
                nodes: vec![],
            },
        };

        record.dns_servers = dns_servers.to_vec();
        record.date = node.date.clone();
        record.time = node.time.clone();
        record.timestamp = node.timestamp.clone();
        record.nodes.insert(0, node);

        records.insert(0, record);
        records.truncate(max_records);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<HistoryRecord>, DomainError> {
        Ok(self.records.read().await.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| !r.matches_id(id));
        Ok(records.len() != before)
    }

    async fn clear(&self) -> Result<u64, DomainError> {
        let mut records = self.records.write().await;
        let removed = records.len() as u64;
        records.clear();
        Ok(removed)
    }
}
