//! Recommended fee-rate client
//!
//! Fetches `fastestFee`/`halfHourFee`/`hourFee`/`economyFee`/`minimumFee` from a
//! mempool.space-compatible endpoint. Every response is validated before it is
//! handed out; when retries run out the configured fallback snapshot is used.

use super::retry::{retry_with_backoff, RetryPolicy};
use crate::config::MempoolConfig;
use crate::errors::{FeedError, FeedResult};
use crate::types::{FeeRateSnapshot, SnapshotSource};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// A snapshot plus where and when it was obtained
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FetchedSnapshot {
    pub snapshot: FeeRateSnapshot,
    pub source: SnapshotSource,
    pub fetched_at: DateTime<Utc>,
}

impl FetchedSnapshot {
    pub fn new(snapshot: FeeRateSnapshot, source: SnapshotSource) -> Self {
        Self {
            snapshot,
            source,
            fetched_at: Utc::now(),
        }
    }
}

/// Parse and validate a recommended-fees response body
pub fn parse_snapshot(body: &str) -> FeedResult<FeeRateSnapshot> {
    let snapshot: FeeRateSnapshot = serde_json::from_str(body).map_err(|e| {
        FeedError::InvalidResponse(format!("Invalid recommended-fees payload: {}", e))
    })?;
    snapshot
        .validate()
        .map_err(|e| FeedError::InvalidResponse(e.to_string()))?;
    Ok(snapshot)
}

/// HTTP client for the recommended-fees endpoint
pub struct MempoolClient {
    http: reqwest::Client,
    config: MempoolConfig,
    fallback: FeeRateSnapshot,
}

impl MempoolClient {
    /// Create a client; `fallback` is returned by [`Self::fetch_snapshot_or_fallback`]
    /// once the feed is exhausted
    pub fn new(config: MempoolConfig, fallback: FeeRateSnapshot) -> FeedResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| FeedError::RequestFailed {
                endpoint: config.url.clone(),
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            http,
            config,
            fallback,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.url
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.config.poll_interval_seconds)
    }

    /// Fetch a snapshot, retrying transient failures
    pub async fn fetch_snapshot(&self) -> FeedResult<FeeRateSnapshot> {
        let policy = RetryPolicy::from(&self.config);
        let snapshot =
            retry_with_backoff(&policy, "fetch recommended fees", || self.fetch_once()).await?;

        info!(
            fastest = snapshot.fastest,
            half_hour = snapshot.half_hour,
            hour = snapshot.hour,
            economy = snapshot.economy,
            minimum = snapshot.minimum,
            "Fetched recommended fee rates"
        );
        Ok(snapshot)
    }

    /// Fetch a snapshot, substituting the fallback if the feed fails
    pub async fn fetch_snapshot_or_fallback(&self) -> FetchedSnapshot {
        match self.fetch_snapshot().await {
            Ok(snapshot) => FetchedSnapshot::new(snapshot, SnapshotSource::Live),
            Err(e) => {
                warn!("Using fallback fee rates: {}", e);
                FetchedSnapshot::new(self.fallback, SnapshotSource::Fallback)
            }
        }
    }

    async fn fetch_once(&self) -> FeedResult<FeeRateSnapshot> {
        debug!("GET {}", self.config.url);

        let response = self
            .http
            .get(&self.config.url)
            .send()
            .await
            .map_err(|e| self.request_failed(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.request_failed(e))?;

        if !status.is_success() {
            return Err(FeedError::Status {
                endpoint: self.config.url.clone(),
                status: status.as_u16(),
                body,
            });
        }

        parse_snapshot(&body)
    }

    fn request_failed(&self, err: reqwest::Error) -> FeedError {
        FeedError::RequestFailed {
            endpoint: self.config.url.clone(),
            message: err.to_string(),
        }
    }
}
