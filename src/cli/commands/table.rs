use super::{AmountArgs, SimulationArgs, SnapshotArgs};
use crate::cli::emit;
use crate::config::AppConfig;
use crate::engine::FeeEngine;
use crate::errors::AppResult;
use crate::report::{DisplayUnit, OutputFormat, ReportFormatter};
use crate::types::FeeRequest;
use clap::Args;

/// Quote all tiers for one payment
#[derive(Args, Debug)]
pub struct TableCommand {
    #[command(flatten)]
    pub amount: AmountArgs,

    #[command(flatten)]
    pub simulation: SimulationArgs,

    #[command(flatten)]
    pub snapshot: SnapshotArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,

    /// Unit for amounts in console output
    #[arg(long, value_enum, default_value_t = DisplayUnit::Sats)]
    pub unit: DisplayUnit,
}

impl TableCommand {
    pub async fn run(&self, config: &AppConfig) -> AppResult<()> {
        let amount_sats = self.amount.to_sats()?;
        FeeEngine::validate_amount(amount_sats)?;

        let fetched = self.snapshot.resolve(config).await?;
        let congestion_override = self.simulation.congestion_override();

        let quotes =
            FeeEngine::quote_all_tiers(amount_sats, congestion_override, Some(&fetched.snapshot))?;

        // Any tier gives the same effective rate
        let request = FeeRequest {
            amount_sats,
            tier: quotes[0].0,
            congestion_override,
        };
        let rate = FeeEngine::effective_congestion(&request, Some(&fetched.snapshot))?;

        emit(&ReportFormatter::format_tier_table(amount_sats, rate, &quotes, self.format, self.unit)?)
    }
}
