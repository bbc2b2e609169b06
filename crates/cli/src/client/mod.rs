//! HTTP client for the dnscheck backend.

use dnscheck_api::dto::{
    ClearHistoryResponse, DeleteHistoryRequest, DeleteHistoryResponse, DnsConfigResponse,
    HistoryRecordDto, QueryDnsRequest, QueryProgressResponse, QueryResultsEnvelope,
    SaveDnsConfigRequest, SaveDnsConfigResponse,
};
use dnscheck_domain::{DomainResultSet, HistoryRecord, QueryProgress};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// A batch over many slow servers can take a while.
const QUERY_TIMEOUT: Duration = Duration::from_secs(300);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const PROGRESS_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Cannot reach dnscheck backend at {url}: {reason}")]
    Unreachable { url: String, reason: String },

    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    #[error("Unexpected response from backend: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Runs a comparison. `dns_servers` empty means the backend's stored list.
    pub async fn query_dns(
        &self,
        domains: &[String],
        dns_servers: &[String],
    ) -> Result<DomainResultSet> {
        let request = QueryDnsRequest {
            domains: domains.to_vec(),
            dns_servers: (!dns_servers.is_empty()).then(|| dns_servers.to_vec()),
        };
        let envelope: QueryResultsEnvelope =
            self.post("/query_dns", &request, QUERY_TIMEOUT).await?;
        Ok(envelope.into_results())
    }

    pub async fn get_progress(&self) -> Result<QueryProgress> {
        let progress: QueryProgressResponse =
            self.get("/get_query_progress", PROGRESS_TIMEOUT).await?;
        Ok(progress.into_domain())
    }

    /// A body without a server list reads as empty.
    pub async fn get_dns_config(&self) -> Result<Vec<String>> {
        let body: serde_json::Value = self.get("/get_dns_config", DEFAULT_TIMEOUT).await?;
        Ok(decode_dns_config(body))
    }

    pub async fn save_dns_config(&self, dns_servers: &[String]) -> Result<SaveDnsConfigResponse> {
        let request = SaveDnsConfigRequest {
            dns_servers: dns_servers.to_vec(),
        };
        self.post("/save_dns_config", &request, DEFAULT_TIMEOUT).await
    }

    /// Records that do not decode are skipped; a body without a `history`
    /// list reads as empty.
    pub async fn get_history(&self) -> Result<Vec<HistoryRecord>> {
        let body: serde_json::Value = self.get("/get_dns_history", DEFAULT_TIMEOUT).await?;
        Ok(decode_history(body))
    }

    pub async fn delete_history(&self, record_id: &str) -> Result<DeleteHistoryResponse> {
        let request = DeleteHistoryRequest {
            record_id: Some(record_id.to_string()),
        };
        self.post("/delete_dns_history", &request, DEFAULT_TIMEOUT)
            .await
    }

    pub async fn clear_history(&self) -> Result<ClearHistoryResponse> {
        let url = self.url("/clear_dns_history");
        debug!(url = %url, "POST request");

        let response = self
            .http
            .post(&url)
            .timeout(DEFAULT_TIMEOUT)
            .send()
            .await
            .map_err(|e| self.unreachable(e))?;
        self.handle_response(response).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, timeout: Duration) -> Result<T> {
        let url = self.url(path);
        debug!(url = %url, "GET request");

        let response = self
            .http
            .get(&url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| self.unreachable(e))?;
        self.handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        timeout: Duration,
    ) -> Result<T> {
        let url = self.url(path);
        debug!(url = %url, "POST request");

        let response = self
            .http
            .post(&url)
            .timeout(timeout)
            .json(body)
            .send()
            .await
            .map_err(|e| self.unreachable(e))?;
        self.handle_response(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn unreachable(&self, error: reqwest::Error) -> ClientError {
        ClientError::Unreachable {
            url: self.base_url.clone(),
            reason: error.to_string(),
        }
    }

    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        if status.is_success() {
            return serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()));
        }

        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or(body);

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

fn decode_dns_config(body: serde_json::Value) -> Vec<String> {
    match serde_json::from_value::<DnsConfigResponse>(body) {
        Ok(config) => config.dns_servers,
        Err(e) => {
            warn!(error = %e, "Unreadable DNS config response, showing none");
            Vec::new()
        }
    }
}

fn decode_history(body: serde_json::Value) -> Vec<HistoryRecord> {
    let Some(entries) = body.get("history").and_then(|h| h.as_array()) else {
        warn!("History response has no record list, showing none");
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            serde_json::from_value::<HistoryRecordDto>(entry.clone())
                .map(HistoryRecordDto::into_domain)
                .map_err(|e| warn!(error = %e, "Skipping unreadable history record"))
                .ok()
        })
        .collect()
}
