use crate::record_set::DomainResultSet;
use chrono::{DateTime, Local};

pub const NODE_ID_FORMAT: &str = "%Y%m%d%H%M%S%3f";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Dedup key of a record: the domains sorted and comma-joined.
pub fn history_key<S: AsRef<str>>(domains: &[S]) -> String {
    let mut sorted: Vec<&str> = domains.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();
    sorted.join(",")
}

/// One execution of a query.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeNode {
    pub id: String,
    pub date: String,
    pub time: String,
    pub timestamp: String,
    pub results: DomainResultSet,
}

impl TimeNode {
    pub fn at(when: DateTime<Local>, results: DomainResultSet) -> Self {
        Self {
            id: when.format(NODE_ID_FORMAT).to_string(),
            date: when.format(DATE_FORMAT).to_string(),
            time: when.format(TIME_FORMAT).to_string(),
            timestamp: when.format(TIMESTAMP_FORMAT).to_string(),
            results,
        }
    }

    pub fn now(results: DomainResultSet) -> Self {
        Self::at(Local::now(), results)
    }
}

/// All executions of the same domain set, newest node first.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRecord {
    pub domains: Vec<String>,
    pub dns_servers: Vec<String>,
    pub date: String,
    pub time: String,
    pub timestamp: String,
    pub nodes: Vec<TimeNode>,
}

impl HistoryRecord {
    pub fn key(&self) -> String {
        history_key(&self.domains)
    }

    pub fn latest(&self) -> Option<&TimeNode> {
        self.nodes.first()
    }

    /// A record queried once is presented without time nodes.
    pub fn is_flat(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Matches the flat id or any node id.
    pub fn matches_id(&self, id: &str) -> bool {
        self.nodes.iter().any(|node| node.id == id)
    }
}

/// Detail view of a record: one node shown, the rest selectable.
#[derive(Debug, Clone)]
pub struct HistoryDetail {
    pub domains: Vec<String>,
    pub dns_servers: Vec<String>,
    nodes: Vec<TimeNode>,
    selected: usize,
}

impl HistoryDetail {
    /// Selects the most recent node; node ids sort chronologically.
    pub fn new(record: HistoryRecord) -> Self {
        let mut nodes = record.nodes;
        nodes.sort_by(|a, b| b.id.cmp(&a.id));
        Self {
            domains: record.domains,
            dns_servers: record.dns_servers,
            nodes,
            selected: 0,
        }
    }

    pub fn selected(&self) -> Option<&TimeNode> {
        self.nodes.get(self.selected)
    }

    /// Nodes not currently shown, newest first.
    pub fn others(&self) -> impl Iterator<Item = &TimeNode> {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != self.selected)
            .map(|(_, node)| node)
    }

    /// Returns false and keeps the selection when no node has `node_id`.
    pub fn select(&mut self, node_id: &str) -> bool {
        match self.nodes.iter().position(|node| node.id == node_id) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    pub fn nodes(&self) -> &[TimeNode] {
        &self.nodes
    }
}
