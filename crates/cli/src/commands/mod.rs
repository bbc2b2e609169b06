pub mod config;
pub mod history;
pub mod preview;
pub mod query;
pub mod serve;
