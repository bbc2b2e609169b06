use dnscheck_application::use_cases::{
    ClearHistoryUseCase, DeleteHistoryUseCase, GetDnsConfigUseCase, GetHistoryUseCase,
    GetQueryProgressUseCase, QueryDnsUseCase, RecordHistoryUseCase, SaveDnsConfigUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct LookupUseCases {
    pub query_dns: Arc<QueryDnsUseCase>,
    pub get_progress: Arc<GetQueryProgressUseCase>,
}

#[derive(Clone)]
pub struct DnsConfigUseCases {
    pub get_config: Arc<GetDnsConfigUseCase>,
    pub save_config: Arc<SaveDnsConfigUseCase>,
}

#[derive(Clone)]
pub struct HistoryUseCases {
    pub record: Arc<RecordHistoryUseCase>,
    pub get_history: Arc<GetHistoryUseCase>,
    pub delete: Arc<DeleteHistoryUseCase>,
    pub clear: Arc<ClearHistoryUseCase>,
}

#[derive(Clone)]
pub struct AppState {
    pub lookup: LookupUseCases,
    pub dns_config: DnsConfigUseCases,
    pub history: HistoryUseCases,
}
