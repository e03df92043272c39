use super::SnapshotArgs;
use crate::cli::emit;
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::report::{OutputFormat, ReportFormatter};
use clap::Args;

/// Show the recommended fee rates the engine would use
#[derive(Args, Debug)]
pub struct RatesCommand {
    #[command(flatten)]
    pub snapshot: SnapshotArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,
}

impl RatesCommand {
    pub async fn run(&self, config: &AppConfig) -> AppResult<()> {
        let fetched = self.snapshot.resolve(config).await?;
        emit(&ReportFormatter::format_snapshot(&fetched, self.format)?)
    }
}
