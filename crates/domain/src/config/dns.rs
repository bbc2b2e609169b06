use serde::{Deserialize, Serialize};

/// Server list used when nothing has been configured yet.
pub const DEFAULT_DNS_SERVERS: [&str; 3] = [
    "202.96.128.166 # China Telecom DNS",
    "183.240.8.114 # China Unicom DNS",
    "8.8.8.8 # Google DNS",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Ordered server lines, `address[:port] [# label]`.
    #[serde(default = "default_servers")]
    pub servers: Vec<String>,

    /// Per-attempt timeout for a single server, in milliseconds.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Upper bound on simultaneous (domain, server) lookups.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            servers: default_servers(),
            query_timeout_ms: default_query_timeout_ms(),
            max_concurrency: default_max_concurrency(),
        }
    }
}

impl DnsConfig {
    /// Configured servers with blank lines dropped, falling back to the
    /// defaults when the list is empty.
    pub fn effective_servers(&self) -> Vec<String> {
        let servers: Vec<String> = self
            .servers
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if servers.is_empty() {
            default_servers()
        } else {
            servers
        }
    }
}

fn default_servers() -> Vec<String> {
    DEFAULT_DNS_SERVERS.iter().map(|s| s.to_string()).collect()
}

fn default_query_timeout_ms() -> u64 {
    2000
}

fn default_max_concurrency() -> usize {
    20
}
