use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::{get, post},
    Router,
};
use tracing::{info, instrument};

use crate::{
    dto::{DnsConfigResponse, SaveDnsConfigRequest, SaveDnsConfigResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/get_dns_config", get(get_dns_config))
        .route("/save_dns_config", post(save_dns_config))
}

async fn get_dns_config(
    State(state): State<AppState>,
) -> Result<Json<DnsConfigResponse>, ApiError> {
    let dns_servers = state.dns_config.get_config.execute().await?;
    Ok(Json(DnsConfigResponse { dns_servers }))
}

#[instrument(skip(state, payload), name = "api_save_dns_config")]
async fn save_dns_config(
    State(state): State<AppState>,
    payload: Result<Json<SaveDnsConfigRequest>, JsonRejection>,
) -> Result<Json<SaveDnsConfigResponse>, ApiError> {
    let Json(req) = payload?;
    let dns_servers = state.dns_config.save_config.execute(&req.dns_servers).await?;

    info!(count = dns_servers.len(), "DNS server list saved");
    Ok(Json(SaveDnsConfigResponse {
        message: "DNS configuration saved".to_string(),
        dns_servers,
    }))
}
