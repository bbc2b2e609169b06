use anyhow::Context;
use colored::Colorize;
use dnscheck_domain::HistoryDetail;

use crate::client::ApiClient;
use crate::ui::history::{render_history_detail, render_history_list};
use crate::ui::UiState;

pub async fn list(client: &ApiClient) -> anyhow::Result<()> {
    let records = client.get_history().await?;
    print!("{}", render_history_list(&records));
    Ok(())
}

/// `id` may be the record id or any of its run ids.
pub async fn show(
    client: &ApiClient,
    id: &str,
    node: Option<&str>,
    state: UiState,
) -> anyhow::Result<()> {
    let record = client
        .get_history()
        .await?
        .into_iter()
        .find(|record| record.matches_id(id))
        .with_context(|| format!("No history record with id {}", id))?;

    let mut detail = HistoryDetail::new(record);
    if let Some(node) = node {
        if !detail.select(node) {
            anyhow::bail!("Record {} has no run {}", id, node);
        }
    }

    print!("{}", render_history_detail(&detail, &state));
    Ok(())
}

pub async fn delete(client: &ApiClient, id: &str) -> anyhow::Result<()> {
    let response = client.delete_history(id).await?;
    println!("{}", response.message.green());
    Ok(())
}

pub async fn clear(client: &ApiClient) -> anyhow::Result<()> {
    let response = client.clear_history().await?;
    println!("{} ({} removed)", response.message.green(), response.removed);
    Ok(())
}
