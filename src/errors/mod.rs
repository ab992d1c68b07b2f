use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// Ticker listing unreachable. Fatal: the whole scan aborts.
    #[error("exchange unreachable: {0}")]
    Connectivity(#[source] reqwest::Error),
    /// One candle fetch or decode failed. Contained by the scanner,
    /// which records the skip and moves on.
    #[error("fetch failed for {symbol} [{timeframe}]: {reason}")]
    Fetch {
        symbol: String,
        timeframe: String,
        reason: String,
    },
    /// Webhook POST failed. Logged, never retried, never fails the scan.
    #[error("webhook delivery failed: {0}")]
    Delivery(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ScanError {
    pub fn fetch(symbol: &str, timeframe: &str, reason: impl ToString) -> Self {
        ScanError::Fetch {
            symbol: symbol.to_string(),
            timeframe: timeframe.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for ScanError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ScanError::Config(errors.to_string())
    }
}
