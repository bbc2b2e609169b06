use colored::Colorize;
use dnscheck_domain::config::DEFAULT_DNS_SERVERS;
use dnscheck_domain::DomainPreview;
use tracing::warn;

use crate::client::{ApiClient, ClientError};
use crate::ui::preview::render_preview;
use crate::ui::progress::ProgressPoller;
use crate::ui::results::render_results;
use crate::ui::UiState;

pub struct QueryOptions {
    pub inputs: Vec<String>,
    pub dns_servers: Vec<String>,
    pub json: bool,
}

pub async fn run(client: &ApiClient, options: QueryOptions, state: UiState) -> anyhow::Result<()> {
    let preview = DomainPreview::from_input(&options.inputs.join(" "));
    if preview.is_empty() {
        anyhow::bail!("No valid domains to query");
    }
    if state.show_preview && !options.json {
        print!("{}", render_preview(&preview));
        println!();
    }

    let servers = if options.dns_servers.is_empty() {
        stored_servers(client).await?
    } else {
        options.dns_servers
    };

    let poller = ProgressPoller::start(client.clone());
    let outcome = client.query_dns(&preview.domains, &servers).await;
    poller.stop().await;
    let results = outcome?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let state = state.with_servers(servers);
    print!("{}", render_results(&results, &state));
    println!(
        "{}",
        format!(
            "{} domain(s) checked against {} server(s)",
            results.len(),
            state.servers.len()
        )
        .dimmed()
    );
    Ok(())
}

async fn stored_servers(client: &ApiClient) -> anyhow::Result<Vec<String>> {
    let servers = match client.get_dns_config().await {
        Ok(servers) => servers,
        Err(ClientError::Decode(e)) => {
            warn!(error = %e, "Unreadable DNS config from backend");
            Vec::new()
        }
        Err(e) => return Err(e.into()),
    };
    Ok(servers_or_defaults(servers))
}

fn servers_or_defaults(servers: Vec<String>) -> Vec<String> {
    if servers.is_empty() {
        warn!("Backend returned no DNS servers, using defaults");
        return DEFAULT_DNS_SERVERS.iter().map(|s| s.to_string()).collect();
    }
    servers
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Router};

    #[tokio::test]
    async fn test_undecodable_config_falls_back_to_defaults() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = Router::new().route("/get_dns_config", get(|| async { "not json" }));
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let client = ApiClient::new(format!("http://{}", addr));
        let servers = stored_servers(&client).await.unwrap();
        assert_eq!(servers.len(), DEFAULT_DNS_SERVERS.len());
        assert_eq!(servers[0], DEFAULT_DNS_SERVERS[0]);
    }

    #[test]
    fn test_stored_servers_are_kept() {
        let servers = vec!["9.9.9.9".to_string()];
        assert_eq!(servers_or_defaults(servers.clone()), servers);
    }
}
