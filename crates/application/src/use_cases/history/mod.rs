pub mod clear_history;
pub mod delete_history;
pub mod get_history;
pub mod record_history;

pub use clear_history::ClearHistoryUseCase;
pub use delete_history::DeleteHistoryUseCase;
pub use get_history::GetHistoryUseCase;
pub use record_history::{RecordHistoryUseCase, DEFAULT_MAX_RECORDS};
