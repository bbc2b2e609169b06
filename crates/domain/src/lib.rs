//! dnscheck domain layer
//!
//! Pure types and transformations shared by the backend service and the
//! console client. Nothing in here performs I/O.
pub mod a_record;
pub mod config;
pub mod consistency;
pub mod display;
pub mod dns_server;
pub mod errors;
pub mod history;
pub mod normalize;
pub mod progress;
pub mod record_set;

pub use a_record::{clean_a_record_value, is_likely_ipv4, is_placeholder};
pub use config::{CliOverrides, Config, ConfigError};
pub use consistency::{ConsistencyTable, CorroborationColor, MIN_CORROBORATING_SERVERS};
pub use display::{cname_style, ARecordDisplay, DisplayStyle};
pub use dns_server::ServerEntry;
pub use errors::DomainError;
pub use history::{history_key, HistoryDetail, HistoryRecord, TimeNode};
pub use normalize::{normalize_domain, normalize_domains, split_domain_input, DomainPreview};
pub use progress::{QueryProgress, QueryStatus};
pub use record_set::{DomainResultSet, RecordType, RecordValue, ServerRecords, ServerResponse};
