pub mod get_query_progress;
pub mod query_dns;

pub use get_query_progress::GetQueryProgressUseCase;
pub use query_dns::{QueryDnsUseCase, DEFAULT_MAX_CONCURRENCY};
