use super::Repositories;
use dnscheck_api::state::{DnsConfigUseCases, HistoryUseCases, LookupUseCases};
use dnscheck_api::AppState;
use dnscheck_application::services::QueryProgressTracker;
use dnscheck_application::use_cases::{
    ClearHistoryUseCase, DeleteHistoryUseCase, GetDnsConfigUseCase, GetHistoryUseCase,
    GetQueryProgressUseCase, QueryDnsUseCase, RecordHistoryUseCase, SaveDnsConfigUseCase,
};
use dnscheck_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub query_dns: Arc<QueryDnsUseCase>,
    pub get_progress: Arc<GetQueryProgressUseCase>,
    pub get_dns_config: Arc<GetDnsConfigUseCase>,
    pub save_dns_config: Arc<SaveDnsConfigUseCase>,
    pub record_history: Arc<RecordHistoryUseCase>,
    pub get_history: Arc<GetHistoryUseCase>,
    pub delete_history: Arc<DeleteHistoryUseCase>,
    pub clear_history: Arc<ClearHistoryUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, config: &Config) -> Self {
        let progress = Arc::new(QueryProgressTracker::new());

        Self {
            query_dns: Arc::new(
                QueryDnsUseCase::new(repos.lookup.clone(), progress.clone())
                    .with_max_concurrency(config.dns.max_concurrency),
            ),
            get_progress: Arc::new(GetQueryProgressUseCase::new(progress)),
            get_dns_config: Arc::new(GetDnsConfigUseCase::new(repos.dns_servers.clone())),
            save_dns_config: Arc::new(SaveDnsConfigUseCase::new(repos.dns_servers.clone())),
            record_history: Arc::new(
                RecordHistoryUseCase::new(repos.history.clone())
                    .with_max_records(config.history.max_records as usize),
            ),
            get_history: Arc::new(GetHistoryUseCase::new(repos.history.clone())),
            delete_history: Arc::new(DeleteHistoryUseCase::new(repos.history.clone())),
            clear_history: Arc::new(ClearHistoryUseCase::new(repos.history.clone())),
        }
    }

    pub fn into_app_state(self) -> AppState {
        AppState {
            lookup: LookupUseCases {
                query_dns: self.query_dns,
                get_progress: self.get_progress,
            },
            dns_config: DnsConfigUseCases {
                get_config: self.get_dns_config,
                save_config: self.save_dns_config,
            },
            history: HistoryUseCases {
                record: self.record_history,
                get_history: self.get_history,
                delete: self.delete_history,
                clear: self.clear_history,
            },
        }
    }
}
