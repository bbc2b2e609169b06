pub mod database;
pub mod dns;
pub mod errors;
pub mod history;
pub mod logging;
pub mod root;
pub mod server;

pub use database::DatabaseConfig;
pub use dns::{DnsConfig, DEFAULT_DNS_SERVERS};
pub use errors::ConfigError;
pub use history::HistoryConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config, DEFAULT_CONFIG_FILE, SYSTEM_CONFIG_FILE};
pub use server::ServerConfig;
