use dnscheck_domain::{DomainResultSet, QueryProgress, QueryStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryDnsRequest {
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_servers: Option<Vec<String>>,
}

/// Body of a `/query_dns` response. The backend sends the bare result set;
/// the wrapped form is accepted for compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryResultsEnvelope {
    Wrapped(WrappedResults),
    Bare(DomainResultSet),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WrappedResults {
    pub results: DomainResultSet,
}

impl QueryResultsEnvelope {
    pub fn into_results(self) -> DomainResultSet {
        match self {
            QueryResultsEnvelope::Wrapped(wrapped) => wrapped.results,
            QueryResultsEnvelope::Bare(results) => results,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryProgressResponse {
    pub percentage: u32,
    pub current: usize,
    pub total: usize,
    pub status: String,
}

impl QueryProgressResponse {
    pub fn from_domain(p: QueryProgress) -> Self {
        Self {
            percentage: p.percentage,
            current: p.current,
            total: p.total,
            status: p.status.as_str().to_string(),
        }
    }

    /// Unknown status strings read as idle.
    pub fn into_domain(self) -> QueryProgress {
        QueryProgress {
            current: self.current,
            total: self.total,
            percentage: self.percentage,
            status: self.status.parse().unwrap_or(QueryStatus::Idle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_accepts_both_shapes() {
        let bare = r#"{"example.com": {"8.8.8.8": {"A": ["1.1.1.1"], "CNAME": "No CNAME record (NoAnswer)"}}}"#;
        let wrapped = format!(r#"{{"results": {}}}"#, bare);

        let from_bare: QueryResultsEnvelope = serde_json::from_str(bare).unwrap();
        let from_wrapped: QueryResultsEnvelope = serde_json::from_str(&wrapped).unwrap();

        assert_eq!(from_bare.into_results(), from_wrapped.into_results());
    }

    #[test]
    fn test_domain_named_results_is_not_unwrapped() {
        let body = r#"{"results": {"8.8.8.8": {"A": [], "CNAME": []}}, "example.com": {}}"#;
        let parsed: QueryResultsEnvelope = serde_json::from_str(body).unwrap();

        let results = parsed.into_results();
        assert!(results.contains_key("results"));
        assert!(results.contains_key("example.com"));
    }
}
