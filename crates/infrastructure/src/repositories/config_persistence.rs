use async_trait::async_trait;
use dnscheck_application::ports::DnsServerStore;
use dnscheck_domain::{Config, ConfigError, DomainError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, instrument};

/// Server list kept in the `[dns]` section of the configuration file.
///
/// The live `Config` is updated together with the file so later reads see
/// the new list without a reload.
pub struct TomlDnsServerStore {
    config: Arc<RwLock<Config>>,
    path: Option<PathBuf>,
}

impl TomlDnsServerStore {
    /// Without a path the list only lives in memory.
    pub fn new(config: Arc<RwLock<Config>>, path: Option<PathBuf>) -> Self {
        Self { config, path }
    }
}

#[async_trait]
impl DnsServerStore for TomlDnsServerStore {
    async fn load(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.config.read().await.dns.effective_servers())
    }

    #[instrument(skip(self, servers), fields(count = servers.len()))]
    async fn save(&self, servers: &[String]) -> Result<(), DomainError> {
        let mut config = self.config.write().await;

        if let Some(path) = &self.path {
            let mut updated = config.clone();
            updated.dns.servers = servers.to_vec();

            save_servers_to_file(&updated, path).await.map_err(|e| {
                error!(error = %e, path = %path.display(), "Failed to persist DNS servers");
                DomainError::ConfigError(e.to_string())
            })?;
            info!(path = %path.display(), "DNS servers written to config file");
        }

        config.dns.servers = servers.to_vec();
        Ok(())
    }
}

/// Rewrites only `[dns].servers`, keeping comments and everything else in
/// an existing file. A missing file is created from the whole `config`.
pub async fn save_servers_to_file(config: &Config, path: &Path) -> Result<(), ConfigError> {
    let display = path.display().to_string();

    let exists = tokio::fs::try_exists(path)
        .await
        .map_err(|e| ConfigError::FileRead(display.clone(), e.to_string()))?;

    let contents = if exists {
        let existing = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::FileRead(display.clone(), e.to_string()))?;
        update_servers(&existing, &config.dns.servers)?
    } else {
        config.to_toml_string()?
    };

    tokio::fs::write(path, contents)
        .await
        .map_err(|e| ConfigError::FileWrite(display, e.to_string()))?;
    Ok(())
}

fn update_servers(existing: &str, servers: &[String]) -> Result<String, ConfigError> {
    let mut doc = existing
        .parse::<toml_edit::DocumentMut>()
        .map_err(|e| ConfigError::Parse(format!("Failed to parse config file: {}", e)))?;

    if !doc.contains_key("dns") {
        doc.insert("dns", toml_edit::Item::Table(toml_edit::Table::new()));
    }

    let dns = doc
        .get_mut("dns")
        .and_then(|item| item.as_table_mut())
        .ok_or_else(|| ConfigError::Validation("[dns] must be a table".to_string()))?;

    set_val(dns, "servers", str_array(servers));
    Ok(doc.to_string())
}

fn set_val(table: &mut toml_edit::Table, key: &str, new_val: toml_edit::Value) {
    match table.get_mut(key) {
        Some(item @ toml_edit::Item::Value(_)) => {
            let suffix = item.as_value().and_then(|v| v.decor().suffix()).cloned();
            *item = toml_edit::Item::Value(new_val);
            if let (Some(s), Some(v)) = (suffix, item.as_value_mut()) {
                v.decor_mut().set_suffix(s);
            }
        }
        Some(item) => *item = toml_edit::Item::Value(new_val),
        None => {
            table.insert(key, toml_edit::Item::Value(new_val));
        }
    }
}

/// One server per line so diffs of the file stay readable.
fn str_array(values: &[String]) -> toml_edit::Value {
    let mut arr = toml_edit::Array::new();
    for v in values {
        arr.push_formatted(toml_edit::Value::from(v.as_str()).decorated("\n    ", ""));
    }
    arr.set_trailing("\n");
    arr.set_trailing_comma(true);
    toml_edit::Value::Array(arr)
}
