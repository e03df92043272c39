use super::{AmountArgs, PriceArgs, SimulationArgs, SnapshotArgs};
use crate::cli::emit;
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::report::{DisplayUnit, OutputFormat, QuoteReport, ReportFormatter};
use crate::types::{FeeRequest, FeeTier};
use clap::Args;

/// Quote the fee for one payment
#[derive(Args, Debug)]
pub struct QuoteCommand {
    #[command(flatten)]
    pub amount: AmountArgs,

    /// Fee tier (priority, standard, economy)
    #[arg(long, value_enum, default_value_t = FeeTier::Priority)]
    pub tier: FeeTier,

    #[command(flatten)]
    pub simulation: SimulationArgs,

    #[command(flatten)]
    pub snapshot: SnapshotArgs,

    #[command(flatten)]
    pub price: PriceArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,

    /// Unit for amounts in console output
    #[arg(long, value_enum, default_value_t = DisplayUnit::Sats)]
    pub unit: DisplayUnit,
}

impl QuoteCommand {
    pub async fn run(&self, config: &AppConfig) -> AppResult<()> {
        let request = self.request()?;

        let (fetched, spot_price) = tokio::join!(
            self.snapshot.resolve(config),
            self.price.resolve(config)
        );
        let fetched = fetched?;

        let report = QuoteReport::build(
            request,
            Some(&fetched.snapshot),
            Some(fetched.source),
            spot_price,
        )?;
        emit(&ReportFormatter::format_quote(&report, self.format, self.unit)?)
    }

    /// Build the engine request from the parsed arguments
    pub fn request(&self) -> AppResult<FeeRequest> {
        Ok(FeeRequest {
            amount_sats: self.amount.to_sats()?,
            tier: self.tier,
            congestion_override: self.simulation.congestion_override(),
        })
    }
}
