pub mod config_persistence;
pub mod history_repository;

pub use config_persistence::TomlDnsServerStore;
pub use history_repository::SqliteHistoryRepository;
