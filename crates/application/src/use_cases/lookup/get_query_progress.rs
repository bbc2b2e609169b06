use dnscheck_domain::QueryProgress;
use std::sync::Arc;

use crate::services::QueryProgressTracker;

pub struct GetQueryProgressUseCase {
    progress: Arc<QueryProgressTracker>,
}

impl GetQueryProgressUseCase {
    pub fn new(progress: Arc<QueryProgressTracker>) -> Self {
        Self { progress }
    }

    pub fn execute(&self) -> QueryProgress {
        self.progress.snapshot()
    }

    /// Flags the running batch as failed.
    pub fn mark_error(&self) {
        self.progress.mark_error();
    }
}
