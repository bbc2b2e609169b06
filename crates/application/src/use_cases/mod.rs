pub mod dns_config;
pub mod history;
pub mod lookup;

pub use dns_config::{GetDnsConfigUseCase, SaveDnsConfigUseCase};
pub use history::{
    ClearHistoryUseCase, DeleteHistoryUseCase, GetHistoryUseCase, RecordHistoryUseCase,
};
pub use lookup::{GetQueryProgressUseCase, QueryDnsUseCase};
