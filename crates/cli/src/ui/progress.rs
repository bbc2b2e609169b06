use async_trait::async_trait;
use dnscheck_domain::{QueryProgress, QueryStatus};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::client::{self, ApiClient};

pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

const BAR_TEMPLATE: &str = "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}";

/// Source of progress snapshots.
#[async_trait]
pub trait ProgressSource: Send + Sync + 'static {
    async fn fetch(&self) -> client::Result<QueryProgress>;
}

#[async_trait]
impl ProgressSource for ApiClient {
    async fn fetch(&self) -> client::Result<QueryProgress> {
        self.get_progress().await
    }
}

/// Polls the backend for progress while a query is in flight.
///
/// The poller runs until [`ProgressPoller::stop`] is called; `stop` waits for
/// the task so no progress update lands after the caller renders results.
pub struct ProgressPoller {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
    bar: ProgressBar,
}

impl ProgressPoller {
    pub fn start<S: ProgressSource>(source: S) -> Self {
        Self::start_with_bar(source, new_bar())
    }

    fn start_with_bar<S: ProgressSource>(source: S, bar: ProgressBar) -> Self {
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(poll(source, bar.clone(), cancel.clone()));
        Self {
            cancel,
            handle,
            bar,
        }
    }

    pub async fn stop(self) {
        self.cancel.cancel();
        if let Err(e) = self.handle.await {
            debug!(error = %e, "Progress poller ended abnormally");
        }
        self.bar.finish_and_clear();
    }
}

fn new_bar() -> ProgressBar {
    let bar = ProgressBar::new(0);
    let style = ProgressStyle::with_template(BAR_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    bar.set_style(style);
    bar.enable_steady_tick(POLL_INTERVAL);
    bar
}

async fn poll<S: ProgressSource>(source: S, bar: ProgressBar, cancel: CancellationToken) {
    let mut ticker = tokio::time::interval(POLL_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut seen_running = false;

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let fetched = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            fetched = source.fetch() => fetched,
        };

        match fetched {
            Ok(progress) => {
                apply(&bar, &progress);
                // A terminal state seen before this batch ran is the previous
                // batch's leftover.
                if progress.status == QueryStatus::Running {
                    seen_running = true;
                } else if seen_running && progress.status.is_terminal() && progress.total > 0 {
                    debug!(status = progress.status.as_str(), "Batch finished, polling stops");
                    break;
                }
            }
            // A missed poll only delays the bar.
            Err(e) => debug!(error = %e, "Progress poll failed"),
        }
    }
}

fn apply(bar: &ProgressBar, progress: &QueryProgress) {
    bar.set_length(progress.total as u64);
    bar.set_position(progress.current as u64);
    bar.set_message(progress.status.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct CountingSource {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ProgressSource for CountingSource {
        async fn fetch(&self) -> client::Result<QueryProgress> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(QueryProgress::new(n.min(10), 10, QueryStatus::Running))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_polls_until_stopped() {
        let source = CountingSource::default();
        let bar = ProgressBar::hidden();
        let poller = ProgressPoller::start_with_bar(source.clone(), bar.clone());

        tokio::time::sleep(Duration::from_millis(350)).await;
        poller.stop().await;

        let polled = source.calls.load(Ordering::SeqCst);
        assert!(polled >= 3, "polled {polled} times");
        assert_eq!(bar.length(), Some(10));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(source.calls.load(Ordering::SeqCst), polled);
    }

    /// Replays a fixed sequence of statuses, repeating the last one.
    #[derive(Clone)]
    struct ScriptedSource {
        script: Arc<Vec<QueryStatus>>,
        calls: Arc<AtomicUsize>,
    }

    impl ScriptedSource {
        fn new(script: Vec<QueryStatus>) -> Self {
            Self {
                script: Arc::new(script),
                calls: Arc::default(),
            }
        }
    }

    #[async_trait]
    impl ProgressSource for ScriptedSource {
        async fn fetch(&self) -> client::Result<QueryProgress> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            let status = self.script[n.min(self.script.len() - 1)];
            Ok(QueryProgress::new(n.min(4), 4, status))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_polling_ends_on_terminal_state() {
        let source = ScriptedSource::new(vec![
            QueryStatus::Running,
            QueryStatus::Running,
            QueryStatus::Completed,
        ]);
        let poller = ProgressPoller::start_with_bar(source.clone(), ProgressBar::hidden());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 3);
        poller.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_leftover_terminal_state_keeps_polling() {
        // The previous batch's "completed" is still visible before this one
        // resets the tracker.
        let source = ScriptedSource::new(vec![
            QueryStatus::Completed,
            QueryStatus::Completed,
            QueryStatus::Running,
            QueryStatus::Error,
        ]);
        let poller = ProgressPoller::start_with_bar(source.clone(), ProgressBar::hidden());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 4);
        poller.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_before_first_tick_completes() {
        let source = CountingSource::default();
        let poller = ProgressPoller::start_with_bar(source.clone(), ProgressBar::hidden());

        poller.stop().await;
        assert!(source.calls.load(Ordering::SeqCst) <= 1);
    }
}
