mod dns_lookup;
mod dns_server_store;
mod history_repository;

pub use dns_lookup::DnsLookupPort;
pub use dns_server_store::DnsServerStore;
pub use history_repository::HistoryRepository;
