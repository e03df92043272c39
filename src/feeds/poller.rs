//! Periodic fee-rate refresh
//!
//! Each tick fetches a new snapshot and publishes it on a `watch` channel.
//! Receivers only ever see whole snapshots; a newer one supersedes the old.
//! The task stops once every receiver is dropped.

use super::mempool::{FetchedSnapshot, MempoolClient};
use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

/// Source of fee-rate snapshots for the poller
pub trait FeeRateFeed: Send + Sync + 'static {
    /// Produce a snapshot; failures are expected to resolve to a fallback
    fn fetch(&self) -> impl Future<Output = FetchedSnapshot> + Send;
}

impl FeeRateFeed for MempoolClient {
    fn fetch(&self) -> impl Future<Output = FetchedSnapshot> + Send {
        self.fetch_snapshot_or_fallback()
    }
}

/// Spawns the refresh loop
pub struct SnapshotPoller;

impl SnapshotPoller {
    /// Start polling `feed` every `period`, first fetch immediately
    pub fn spawn<F: FeeRateFeed>(
        feed: F,
        period: Duration,
    ) -> (watch::Receiver<Option<FetchedSnapshot>>, JoinHandle<()>) {
        let (tx, rx) = watch::channel(None);

        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let fetched = feed.fetch().await;
                info!(
                    "Fee rates refreshed ({}): fastest {} sat/vB",
                    fetched.source, fetched.snapshot.fastest
                );

                if tx.send(Some(fetched)).is_err() {
                    debug!("No snapshot receivers left, stopping poller");
                    break;
                }
            }
        });

        (rx, handle)
    }
}
