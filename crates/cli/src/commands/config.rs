use colored::Colorize;

use crate::client::ApiClient;

pub async fn show(client: &ApiClient) -> anyhow::Result<()> {
    let servers = client.get_dns_config().await?;
    println!("{}", "DNS servers:".bold());
    for server in servers {
        println!("  {}", server);
    }
    Ok(())
}

pub async fn save(client: &ApiClient, servers: &[String]) -> anyhow::Result<()> {
    let response = client.save_dns_config(servers).await?;
    println!("{}", response.message.green());
    for server in response.dns_servers {
        println!("  {}", server);
    }
    Ok(())
}
