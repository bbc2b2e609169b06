use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Record types compared across servers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    CNAME,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::CNAME => "CNAME",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "CNAME" => Ok(RecordType::CNAME),
            _ => Err(format!("Unsupported record type '{}'", s)),
        }
    }
}

/// Status strings reported in place of an answer list.
pub mod placeholder {
    use super::RecordType;

    pub const NXDOMAIN: &str = "NXDOMAIN (domain does not exist)";
    pub const TIMEOUT: &str = "Query timeout";
    pub const INVALID_SERVER: &str = "Error: invalid DNS server address";

    pub fn no_answer(record_type: RecordType) -> String {
        format!("No {} record (NoAnswer)", record_type.as_str())
    }

    pub fn error(detail: impl std::fmt::Display) -> String {
        format!("Error: {}", detail)
    }
}

/// A record value as reported by the backend: an answer list, or a single
/// status string when the lookup produced no answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordValue {
    Many(Vec<String>),
    Single(String),
}

impl RecordValue {
    pub fn values(&self) -> Vec<&str> {
        match self {
            RecordValue::Many(values) => values.iter().map(String::as_str).collect(),
            RecordValue::Single(value) => vec![value.as_str()],
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            RecordValue::Many(values) => values.is_empty(),
            RecordValue::Single(value) => value.is_empty(),
        }
    }
}

impl From<Vec<String>> for RecordValue {
    fn from(values: Vec<String>) -> Self {
        RecordValue::Many(values)
    }
}

impl From<String> for RecordValue {
    fn from(value: String) -> Self {
        RecordValue::Single(value)
    }
}

impl From<&str> for RecordValue {
    fn from(value: &str) -> Self {
        RecordValue::Single(value.to_string())
    }
}

/// Per-server record set for one domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRecords {
    #[serde(rename = "A", default, skip_serializing_if = "Option::is_none")]
    pub a: Option<RecordValue>,

    #[serde(rename = "CNAME", default, skip_serializing_if = "Option::is_none")]
    pub cname: Option<RecordValue>,
}

impl ServerRecords {
    pub fn new(a: impl Into<RecordValue>, cname: impl Into<RecordValue>) -> Self {
        Self {
            a: Some(a.into()),
            cname: Some(cname.into()),
        }
    }

    pub fn get(&self, record_type: RecordType) -> Option<&RecordValue> {
        match record_type {
            RecordType::A => self.a.as_ref(),
            RecordType::CNAME => self.cname.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.a.as_ref().map_or(true, RecordValue::is_empty)
            && self.cname.as_ref().map_or(true, RecordValue::is_empty)
    }
}

/// Server identifier → record set, for a single domain.
pub type ServerResponse = BTreeMap<String, ServerRecords>;

/// Domain → per-server responses.
pub type DomainResultSet = BTreeMap<String, ServerResponse>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_value_accepts_both_cardinalities() {
        let records: ServerRecords = serde_json::from_value(json!({
            "A": ["93.184.216.34", "93.184.216.35"],
            "CNAME": "No CNAME record (NoAnswer)"
        }))
        .unwrap();

        assert_eq!(
            records.a.as_ref().unwrap().values(),
            vec!["93.184.216.34", "93.184.216.35"]
        );
        assert_eq!(
            records.cname.as_ref().unwrap().values(),
            vec!["No CNAME record (NoAnswer)"]
        );
        assert_eq!(records.get(RecordType::A), records.a.as_ref());
    }

    #[test]
    fn test_empty_record_set_serializes_to_empty_object() {
        let value = serde_json::to_value(ServerRecords::default()).unwrap();
        assert_eq!(value, json!({}));
        assert!(ServerRecords::default().is_empty());
    }

    #[test]
    fn test_record_type_parsing() {
        assert_eq!("cname".parse::<RecordType>().unwrap(), RecordType::CNAME);
        assert!("MX".parse::<RecordType>().is_err());
    }

    #[test]
    fn test_placeholders_name_their_record_type() {
        assert_eq!(placeholder::no_answer(RecordType::A), "No A record (NoAnswer)");
        assert_eq!(placeholder::error("boom"), "Error: boom");
    }
}
