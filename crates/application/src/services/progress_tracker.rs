use dnscheck_domain::{QueryProgress, QueryStatus};
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

/// Progress of the batch currently running.
///
/// Shared between the query use case and the progress endpoint. There is
/// only one: a batch started while another runs resets it.
#[derive(Debug, Default)]
pub struct QueryProgressTracker {
    current: AtomicUsize,
    total: AtomicUsize,
    status: AtomicU8,
}

impl QueryProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&self, total: usize) {
        let status = if total > 0 {
            QueryStatus::Running
        } else {
            QueryStatus::Idle
        };
        self.current.store(0, Ordering::Relaxed);
        self.total.store(total, Ordering::Relaxed);
        self.status.store(status.to_u8(), Ordering::Release);
    }

    pub fn increment(&self) {
        self.current.fetch_add(1, Ordering::Relaxed);
    }

    pub fn mark_completed(&self) {
        self.status
            .store(QueryStatus::Completed.to_u8(), Ordering::Release);
    }

    pub fn mark_error(&self) {
        self.status.store(QueryStatus::Error.to_u8(), Ordering::Release);
    }

    pub fn snapshot(&self) -> QueryProgress {
        let status = QueryStatus::from_u8(self.status.load(Ordering::Acquire));
        QueryProgress::new(
            self.current.load(Ordering::Relaxed),
            self.total.load(Ordering::Relaxed),
            status,
        )
    }
}
