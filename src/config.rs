use crate::errors::AppResult;
use crate::types::FeeRateSnapshot;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub mempool: MempoolConfig,
    pub price: PriceConfig,
    pub fallback: FallbackConfig,
}

/// Recommended-fee feed settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MempoolConfig {
    pub url: String,
    pub timeout_seconds: u64,
    pub max_retries: usize,
    pub initial_backoff_ms: u64,
    pub backoff_multiplier: f64,
    pub max_backoff_seconds: u64,
    pub poll_interval_seconds: u64,
}

impl Default for MempoolConfig {
    fn default() -> Self {
        Self {
            url: "https://mempool.space/api/v1/fees/recommended".to_string(),
            timeout_seconds: 10,
            max_retries: 3,
            initial_backoff_ms: 250,
            backoff_multiplier: 2.0,
            max_backoff_seconds: 5,
            poll_interval_seconds: 120,
        }
    }
}

/// BTC spot-price feed settings (GraphQL `btcPriceList`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceConfig {
    pub url: String,
    pub range: String,
    pub timeout_seconds: u64,
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            url: "https://api.blink.sv/graphql".to_string(),
            range: "ONE_DAY".to_string(),
            timeout_seconds: 10,
        }
    }
}

/// Snapshot used when the recommended-fee feed is exhausted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    pub fastest: f64,
    pub half_hour: f64,
    pub hour: f64,
    pub economy: f64,
    pub minimum: f64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            fastest: 50.0,
            half_hour: 30.0,
            hour: 20.0,
            economy: 10.0,
            minimum: 1.0,
        }
    }
}

impl FallbackConfig {
    /// Validated snapshot built from the configured rates
    pub fn snapshot(&self) -> AppResult<FeeRateSnapshot> {
        Ok(FeeRateSnapshot::new(
            self.fastest,
            self.half_hour,
            self.hour,
            self.economy,
            self.minimum,
        )?)
    }
}

impl AppConfig {
    /// Load configuration from ./config.toml (if present) and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration with an explicit file path
    ///
    /// Precedence, lowest first: built-in defaults, config file, `FEECALC_*`
    /// environment variables (`FEECALC_MEMPOOL__URL`, `FEECALC_FALLBACK__FASTEST`, ...).
    /// An explicit path must exist; the implicit ./config.toml is optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mempool = MempoolConfig::default();
        let price = PriceConfig::default();
        let fallback = FallbackConfig::default();

        let file_source = match path {
            Some(p) => File::from(p).required(true),
            None => File::with_name("config").required(false),
        };

        let config = Config::builder()
            // Start with default values
            .set_default("mempool.url", mempool.url)?
            .set_default("mempool.timeout_seconds", mempool.timeout_seconds)?
            .set_default("mempool.max_retries", mempool.max_retries as i64)?
            .set_default("mempool.initial_backoff_ms", mempool.initial_backoff_ms)?
            .set_default("mempool.backoff_multiplier", mempool.backoff_multiplier)?
            .set_default("mempool.max_backoff_seconds", mempool.max_backoff_seconds)?
            .set_default(
                "mempool.poll_interval_seconds",
                mempool.poll_interval_seconds,
            )?
            .set_default("price.url", price.url)?
            .set_default("price.range", price.range)?
            .set_default("price.timeout_seconds", price.timeout_seconds)?
            .set_default("fallback.fastest", fallback.fastest)?
            .set_default("fallback.half_hour", fallback.half_hour)?
            .set_default("fallback.hour", fallback.hour)?
            .set_default("fallback.economy", fallback.economy)?
            .set_default("fallback.minimum", fallback.minimum)?
            .add_source(file_source)
            // FEECALC_MEMPOOL__MAX_RETRIES=5 overrides mempool.max_retries
            .add_source(
                Environment::with_prefix("FEECALC")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;

        if app_config.mempool.poll_interval_seconds == 0 {
            return Err(ConfigError::Message(
                "mempool.poll_interval_seconds must be greater than zero".to_string(),
            ));
        }
        if app_config.mempool.backoff_multiplier < 1.0 {
            return Err(ConfigError::Message(
                "mempool.backoff_multiplier must be at least 1.0".to_string(),
            ));
        }

        Ok(app_config)
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Self {
        // Fall back to built-in values if no usable config is found
        Self::load().unwrap_or_default()
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> AppResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
