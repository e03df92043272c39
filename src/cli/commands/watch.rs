use super::AmountArgs;
use crate::cli::emit;
use crate::config::AppConfig;
use crate::engine::FeeEngine;
use crate::errors::AppResult;
use crate::feeds::{MempoolClient, SnapshotPoller};
use crate::report::{DisplayUnit, OutputFormat, QuoteReport, ReportFormatter};
use crate::types::{FeeRequest, FeeTier};
use clap::Args;
use std::time::Duration;
use tracing::{info, warn};

/// Re-quote a payment every time the fee rates refresh
#[derive(Args, Debug)]
pub struct WatchCommand {
    #[command(flatten)]
    pub amount: AmountArgs,

    /// Fee tier (priority, standard, economy)
    #[arg(long, value_enum, default_value_t = FeeTier::Priority)]
    pub tier: FeeTier,

    /// Seconds between refreshes (overrides mempool.poll_interval_seconds)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_seconds: Option<u64>,

    /// Stop after this many quotes (runs until interrupted if omitted)
    #[arg(long)]
    pub iterations: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,

    /// Unit for amounts in console output
    #[arg(long, value_enum, default_value_t = DisplayUnit::Sats)]
    pub unit: DisplayUnit,
}

impl WatchCommand {
    pub async fn run(&self, config: &AppConfig) -> AppResult<()> {
        let request = FeeRequest::new(self.amount.to_sats()?, self.tier);
        // Fail on a bad amount before starting the poller
        FeeEngine::validate_amount(request.amount_sats)?;

        let client = MempoolClient::new(config.mempool.clone(), config.fallback.snapshot()?)?;
        let period = self
            .interval_seconds
            .map(Duration::from_secs)
            .unwrap_or_else(|| client.poll_interval());
        info!("Polling {} every {:?}", client.endpoint(), period);

        let (mut rx, handle) = SnapshotPoller::spawn(client, period);
        let mut quoted = 0usize;

        while rx.changed().await.is_ok() {
            let Some(fetched) = *rx.borrow_and_update() else {
                continue;
            };

            match QuoteReport::build(request, Some(&fetched.snapshot), Some(fetched.source), None) {
                Ok(report) => emit(&ReportFormatter::format_quote(&report, self.format, self.unit)?)?,
                Err(e) => warn!("Skipping refresh: {}", e),
            }

            quoted += 1;
            if self.iterations.is_some_and(|limit| quoted >= limit) {
                break;
            }
        }

        handle.abort();
        Ok(())
    }
}
