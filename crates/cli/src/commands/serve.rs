use dnscheck_domain::{CliOverrides, Config};
use anyhow::Context;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::info;

use crate::{bootstrap, di, server};

pub async fn run(config_path: Option<String>, overrides: CliOverrides) -> anyhow::Result<()> {
    let config = bootstrap::load_config(config_path.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting dnscheck backend v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database).await?;

    // Saving servers writes back to the file that was loaded, or creates
    // the default one.
    let persist_path = config_path
        .or_else(Config::get_config_path)
        .unwrap_or_else(|| dnscheck_domain::config::DEFAULT_CONFIG_FILE.to_string());
    info!(path = %persist_path, "DNS server list persisted to config file");

    let query_timeout = Duration::from_millis(config.dns.query_timeout_ms);
    let web_addr = listen_addr(&config.server.bind_address, config.server.web_port)?;

    let config_arc = Arc::new(RwLock::new(config.clone()));

    let repos = di::Repositories::new(
        pool,
        config_arc,
        Some(PathBuf::from(persist_path)),
        query_timeout,
    );
    let app_state = di::UseCases::new(&repos, &config).into_app_state();

    server::start_web_server(web_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}

/// `bind` is a bare IP; IPv6 may also come bracketed.
fn listen_addr(bind: &str, port: u16) -> anyhow::Result<SocketAddr> {
    let ip: IpAddr = bind
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .parse()
        .with_context(|| format!("Invalid bind address: {}", bind))?;
    Ok(SocketAddr::new(ip, port))
}
