use dnscheck_domain::Config;
use dnscheck_infrastructure::dns::WireDnsLookup;
use dnscheck_infrastructure::repositories::{SqliteHistoryRepository, TomlDnsServerStore};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

pub struct Repositories {
    pub history: Arc<SqliteHistoryRepository>,
    pub dns_servers: Arc<TomlDnsServerStore>,
    pub lookup: Arc<WireDnsLookup>,
}

impl Repositories {
    pub fn new(
        pool: SqlitePool,
        config: Arc<RwLock<Config>>,
        config_path: Option<PathBuf>,
        query_timeout: Duration,
    ) -> Self {
        Self {
            history: Arc::new(SqliteHistoryRepository::new(pool)),
            dns_servers: Arc::new(TomlDnsServerStore::new(config, config_path)),
            lookup: Arc::new(WireDnsLookup::new(query_timeout)),
        }
    }
}
