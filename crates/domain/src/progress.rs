use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryStatus {
    #[default]
    Idle,
    Running,
    Completed,
    Error,
}

impl QueryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryStatus::Idle => "idle",
            QueryStatus::Running => "running",
            QueryStatus::Completed => "completed",
            QueryStatus::Error => "error",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, QueryStatus::Completed | QueryStatus::Error)
    }

    pub fn to_u8(self) -> u8 {
        match self {
            QueryStatus::Idle => 0,
            QueryStatus::Running => 1,
            QueryStatus::Completed => 2,
            QueryStatus::Error => 3,
        }
    }

    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => QueryStatus::Running,
            2 => QueryStatus::Completed,
            3 => QueryStatus::Error,
            _ => QueryStatus::Idle,
        }
    }
}

impl fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "idle" => Ok(QueryStatus::Idle),
            "running" => Ok(QueryStatus::Running),
            "completed" => Ok(QueryStatus::Completed),
            "error" => Ok(QueryStatus::Error),
            other => Err(format!("Unknown query status '{}'", other)),
        }
    }
}

/// Snapshot of the current batch, as served by the progress endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryProgress {
    pub current: usize,
    pub total: usize,
    pub percentage: u32,
    pub status: QueryStatus,
}

impl QueryProgress {
    pub fn new(current: usize, total: usize, status: QueryStatus) -> Self {
        Self {
            current,
            total,
            percentage: Self::percentage_of(current, total),
            status,
        }
    }

    /// `floor(current / total * 100)`, 0 for an empty batch.
    pub fn percentage_of(current: usize, total: usize) -> u32 {
        if total == 0 {
            return 0;
        }
        let pct = (current.min(total) as u64 * 100) / total as u64;
        pct as u32
    }
}
