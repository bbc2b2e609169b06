use dnscheck_domain::{DomainResultSet, HistoryRecord, TimeNode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeNodeDto {
    pub id: String,
    pub date: String,
    pub time: String,
    pub timestamp: String,
    pub results: DomainResultSet,
}

impl TimeNodeDto {
    pub fn from_domain(node: TimeNode) -> Self {
        Self {
            id: node.id,
            date: node.date,
            time: node.time,
            timestamp: node.timestamp,
            results: node.results,
        }
    }

    pub fn into_domain(self) -> TimeNode {
        TimeNode {
            id: self.id,
            date: self.date,
            time: self.time,
            timestamp: self.timestamp,
            results: self.results,
        }
    }
}

/// A history record on the wire. Records with a single node use the flat
/// `{id, results}` shape, the rest carry `time_nodes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecordDto {
    pub domains: Vec<String>,
    #[serde(default)]
    pub dns_servers: Vec<String>,
    pub date: String,
    pub time: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<DomainResultSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_nodes: Option<Vec<TimeNodeDto>>,
}

impl HistoryRecordDto {
    pub fn from_domain(record: HistoryRecord) -> Self {
        let flat = record.is_flat();
        let mut dto = Self {
            domains: record.domains,
            dns_servers: record.dns_servers,
            date: record.date,
            time: record.time,
            timestamp: record.timestamp,
            id: None,
            results: None,
            time_nodes: None,
        };

        if flat {
            if let Some(node) = record.nodes.into_iter().next() {
                dto.id = Some(node.id);
                dto.results = Some(node.results);
            }
        } else {
            dto.time_nodes = Some(
                record
                    .nodes
                    .into_iter()
                    .map(TimeNodeDto::from_domain)
                    .collect(),
            );
        }
        dto
    }

    /// Either shape becomes a record with at least one node when it carries
    /// any results at all.
    pub fn into_domain(self) -> HistoryRecord {
        let nodes = match (self.time_nodes, self.results) {
            (Some(nodes), _) if !nodes.is_empty() => {
                nodes.into_iter().map(TimeNodeDto::into_domain).collect()
            }
            (_, Some(results)) => vec![TimeNode {
                id: self.id.clone().unwrap_or_default(),
                date: self.date.clone(),
                time: self.time.clone(),
                timestamp: self.timestamp.clone(),
                results,
            }],
            _ => Vec::new(),
        };

        HistoryRecord {
            domains: self.domains,
            dns_servers: self.dns_servers,
            date: self.date,
            time: self.time,
            timestamp: self.timestamp,
            nodes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryListResponse {
    pub history: Vec<HistoryRecordDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteHistoryRequest {
    #[serde(default)]
    pub record_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteHistoryResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearHistoryResponse {
    pub message: String,
    pub removed: u64,
}
