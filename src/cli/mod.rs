use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

pub mod commands;

/// Tiered Bitcoin Payment Fee Calculator
#[derive(Parser)]
#[command(name = "tiered-fee-calculator")]
#[command(about = "Quote Bitcoin payment fees from mempool fee-rate snapshots")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to ./config.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Quote the fee for one payment at one tier
    Quote(commands::quote::QuoteCommand),
    /// Quote every tier side by side
    Table(commands::table::TableCommand),
    /// Show the current recommended fee rates
    Rates(commands::rates::RatesCommand),
    /// Convert between simulator slider positions and congestion rates
    Scale(commands::scale::ScaleCommand),
    /// Poll fee rates and re-quote on every refresh
    Watch(commands::watch::WatchCommand),
    /// Print the effective configuration as TOML
    Config,
}

impl Cli {
    /// Resolve configuration: explicit file if given, otherwise defaults + ./config.toml + env
    pub fn load_config(&self) -> AppResult<AppConfig> {
        match &self.config {
            Some(path) => AppConfig::load_from(Some(path)).map_err(|e| {
                AppError::Config(format!("Failed to load {}: {}", path.display(), e))
            }),
            None => Ok(AppConfig::get_defaults()),
        }
    }
}

/// Write rendered output to stdout
///
/// A closed pipe surfaces as `AppError::Io` instead of a panic.
pub fn emit(output: &str) -> AppResult<()> {
    write_output(&mut io::stdout().lock(), output)
}

/// Write rendered output to `out` and flush it
pub fn write_output<W: Write>(out: &mut W, output: &str) -> AppResult<()> {
    out.write_all(output.as_bytes())?;
    out.flush()?;
    Ok(())
}

pub async fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    let config = cli.load_config()?;

    match cli.command {
        Commands::Quote(command) => command.run(&config).await,
        Commands::Table(command) => command.run(&config).await,
        Commands::Rates(command) => command.run(&config).await,
        Commands::Scale(command) => command.run(),
        Commands::Watch(command) => command.run(&config).await,
        Commands::Config => emit(&config.to_toml()?),
    }
}
