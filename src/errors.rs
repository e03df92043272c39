use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Fee computation failures
    #[error("Fee error: {0}")]
    Fee(#[from] FeeError),

    /// Fee-rate and spot-price feed failures
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON/TOML rendering
    #[error("Serialisation error: {0}")]
    Serialisation(String),
}

/// Fee engine error types
///
/// Every variant carries the offending field and the bound it violated so the
/// caller can render a user-facing message without re-deriving context.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeeError {
    /// Payment amount outside the accepted range
    #[error("Invalid amount: {amount_sats} sats (must be between {min} and {max} sats)")]
    InvalidAmount { amount_sats: u64, min: u64, max: u64 },

    /// BTC-denominated input that cannot be expressed in whole satoshis
    #[error("Invalid BTC amount: {0}")]
    InvalidBtcAmount(String),

    /// No fee-rate snapshot and no congestion override supplied
    #[error("Fee-rate snapshot not available")]
    MissingSnapshot,

    /// Congestion rate that would make the formulas undefined
    #[error("Invalid congestion rate {rate} sat/vB from {field} (must be finite and > 0)")]
    InvalidCongestion { field: &'static str, rate: f64 },

    /// Snapshot field that is not a finite positive rate
    #[error("Invalid snapshot field {field}: {value} sat/vB (must be finite and > 0)")]
    InvalidSnapshot { field: &'static str, value: f64 },
}

/// Feed error types for the recommended-fee and spot-price collaborators
#[derive(Error, Debug)]
pub enum FeedError {
    /// Transport-level failure (DNS, connect, TLS, timeout)
    #[error("Request failed: {endpoint} - {message}")]
    RequestFailed { endpoint: String, message: String },

    /// Non-success HTTP status
    #[error("HTTP {status} from {endpoint}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// Response parsed but did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Retry limit exceeded for a feed operation
    #[error("Max retries exceeded: {operation}")]
    MaxRetriesExceeded { operation: String },

    /// Price list came back empty
    #[error("No price data available")]
    NoPriceData,
}

impl FeedError {
    /// Whether another attempt could plausibly succeed
    pub fn is_transient(&self) -> bool {
        match self {
            FeedError::RequestFailed { .. } => true,
            FeedError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for fee engine operations
pub type FeeResult<T> = Result<T, FeeError>;

/// Result type for feed operations
pub type FeedResult<T> = Result<T, FeedError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialisation(format!("JSON error: {}", err))
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(err: toml::ser::Error) -> Self {
        AppError::Serialisation(format!("TOML error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
