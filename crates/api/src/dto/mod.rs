pub mod config;
pub mod history;
pub mod query;

pub use config::{DnsConfigResponse, SaveDnsConfigRequest, SaveDnsConfigResponse};
pub use history::{
    ClearHistoryResponse, DeleteHistoryRequest, DeleteHistoryResponse, HistoryListResponse,
    HistoryRecordDto, TimeNodeDto,
};
pub use query::{QueryDnsRequest, QueryProgressResponse, QueryResultsEnvelope};
