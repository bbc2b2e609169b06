use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::{get, post},
    Router,
};
use tracing::debug;

use crate::{
    dto::{
        ClearHistoryResponse, DeleteHistoryRequest, DeleteHistoryResponse, HistoryListResponse,
        HistoryRecordDto,
    },
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/get_dns_history", get(get_dns_history))
        .route("/delete_dns_history", post(delete_dns_history))
        .route("/clear_dns_history", post(clear_dns_history))
}

async fn get_dns_history(
    State(state): State<AppState>,
) -> Result<Json<HistoryListResponse>, ApiError> {
    let records = state.history.get_history.execute().await?;
    debug!(count = records.len(), "History retrieved");

    Ok(Json(HistoryListResponse {
        history: records
            .into_iter()
            .map(HistoryRecordDto::from_domain)
            .collect(),
    }))
}

async fn delete_dns_history(
    State(state): State<AppState>,
    payload: Result<Json<DeleteHistoryRequest>, JsonRejection>,
) -> Result<Json<DeleteHistoryResponse>, ApiError> {
    let Json(req) = payload?;
    let record_id = req.record_id.unwrap_or_default();

    state.history.delete.execute(&record_id).await?;
    Ok(Json(DeleteHistoryResponse {
        message: "History record deleted".to_string(),
    }))
}

async fn clear_dns_history(
    State(state): State<AppState>,
) -> Result<Json<ClearHistoryResponse>, ApiError> {
    let removed = state.history.clear.execute().await?;
    Ok(Json(ClearHistoryResponse {
        message: "History cleared".to_string(),
        removed,
    }))
}
