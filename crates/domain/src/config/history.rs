use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoryConfig {
    /// Number of history records kept; older ones are pruned after each query.
    #[serde(default = "default_max_records")]
    pub max_records: u32,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_records: default_max_records(),
        }
    }
}

fn default_max_records() -> u32 {
    30
}
