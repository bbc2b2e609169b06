use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::{get, post},
    Router,
};
use dnscheck_domain::{normalize_domains, DomainError, DomainResultSet};
use tracing::{debug, instrument, warn};

use crate::{
    dto::{QueryDnsRequest, QueryProgressResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/query_dns", post(query_dns))
        .route("/get_query_progress", get(get_query_progress))
}

#[instrument(skip(state, payload), name = "api_query_dns")]
async fn query_dns(
    State(state): State<AppState>,
    payload: Result<Json<QueryDnsRequest>, JsonRejection>,
) -> Result<Json<DomainResultSet>, ApiError> {
    let Json(req) = payload?;

    let domains = normalize_domains(&req.domains);
    if domains.is_empty() {
        return Err(DomainError::NoValidDomains.into());
    }

    let servers = match req.dns_servers {
        Some(servers) if !servers.is_empty() => servers,
        _ => match state.dns_config.get_config.execute().await {
            Ok(servers) => servers,
            Err(e) => {
                state.lookup.get_progress.mark_error();
                return Err(e.into());
            }
        },
    };
    debug!(domains = domains.len(), servers = servers.len(), "Starting DNS comparison");

    let results = match state.lookup.query_dns.execute(&domains, &servers).await {
        Ok(results) => results,
        Err(e) => {
            state.lookup.get_progress.mark_error();
            return Err(e.into());
        }
    };

    if let Err(e) = state
        .history
        .record
        .execute(&domains, &servers, results.clone())
        .await
    {
        warn!(error = %e, "Failed to record query in history");
    }

    Ok(Json(results))
}

async fn get_query_progress(State(state): State<AppState>) -> Json<QueryProgressResponse> {
    Json(QueryProgressResponse::from_domain(
        state.lookup.get_progress.execute(),
    ))
}
