//! Periodic update-check ticker.
//!
//! Schedule and session-request pages surface a transient
//! "Checking for updates..." toast on a fixed interval. [`RefreshTicker`]
//! runs that loop as a background task with cooperative cancellation.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::notification::{NotificationCenter, NotificationLevel};

/// Default interval between update checks.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Display duration for the transient update-check toast, in milliseconds.
const REFRESH_TOAST_DURATION_MS: i64 = 1000;

/// Background task posting periodic update-check toasts.
pub struct RefreshTicker {
    center: Arc<Mutex<NotificationCenter>>,
    interval: Duration,
}

impl RefreshTicker {
    /// Create a ticker with the default 30-second interval.
    pub fn new(center: Arc<Mutex<NotificationCenter>>) -> Self {
        Self::with_interval(center, DEFAULT_REFRESH_INTERVAL)
    }

    /// Create a ticker with an explicit interval.
    pub fn with_interval(center: Arc<Mutex<NotificationCenter>>, interval: Duration) -> Self {
        Self { center, interval }
    }

    /// Run the ticker loop.
    ///
    /// The first toast lands one full interval after start, not
    /// immediately. The loop exits when `cancel` is cancelled.
    pub async fn run(self, cancel: CancellationToken) {
        let mut interval = tokio::time::interval(self.interval);
        // A tokio interval fires immediately; swallow that first tick so
        // the toast cadence starts one interval in.
        interval.tick().await;

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Refresh ticker cancelled");
                    break;
                }
                _ = interval.tick() => {
                    self.post_check();
                }
            }
        }
    }

    /// Purge expired toasts and post the next update-check toast.
    fn post_check(&self) {
        let now = chrono::Utc::now();
        match self.center.lock() {
            Ok(mut center) => {
                center.purge_expired(now);
                center.post_with_duration(
                    NotificationLevel::Info,
                    "Checking for updates...",
                    REFRESH_TOAST_DURATION_MS,
                    now,
                );
            }
            Err(_) => tracing::error!("Notification center lock poisoned, update check skipped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn posts_one_toast_per_interval() {
        let center = Arc::new(Mutex::new(NotificationCenter::new()));
        let cancel = CancellationToken::new();
        let ticker = RefreshTicker::with_interval(Arc::clone(&center), Duration::from_secs(30));
        let handle = tokio::spawn(ticker.run(cancel.clone()));

        // Just past two intervals: two checks should have fired. Expiry is
        // wall-clock based and wall time barely moves under paused tokio
        // time, so both toasts are still held.
        tokio::time::sleep(Duration::from_secs(61)).await;
        cancel.cancel();
        handle.await.expect("ticker task should finish");

        let center = center.lock().expect("test lock");
        assert_eq!(center.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn no_toast_before_the_first_interval() {
        let center = Arc::new(Mutex::new(NotificationCenter::new()));
        let cancel = CancellationToken::new();
        let ticker = RefreshTicker::with_interval(Arc::clone(&center), Duration::from_secs(30));
        let handle = tokio::spawn(ticker.run(cancel.clone()));

        tokio::time::sleep(Duration::from_secs(29)).await;
        cancel.cancel();
        handle.await.expect("ticker task should finish");

        assert!(center.lock().expect("test lock").is_empty());
    }
}
