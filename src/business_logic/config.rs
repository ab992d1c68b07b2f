use std::time::Duration;

use validator::{Validate, ValidationError};

use crate::services::mexc::{interval_code, SUPPORTED_TIMEFRAMES};

/// Scan parameters, validated once at startup and passed into the
/// selector and scanner.
#[derive(Debug, Clone, Validate)]
pub struct ScanConfig {
    /// Quote asset pairs must be denominated in
    #[validate(length(min = 2, max = 12))]
    pub quote_asset: String,
    /// Timeframes scanned per pair, in scan order
    #[validate(length(min = 1), custom(function = "validate_timeframes"))]
    pub timeframes: Vec<String>,
    /// Allowed fractional deviation for the equal-high/equal-low test
    /// (0.002 = 0.2%)
    #[validate(custom(function = "validate_tolerance"))]
    pub tolerance: f64,
    /// Pairs kept after volume ranking
    #[validate(range(min = 1, max = 500))]
    pub pair_limit: usize,
    /// Candles fetched per (pair, timeframe); detection needs three
    #[validate(range(min = 3, max = 1000))]
    pub candle_limit: usize,
    /// Pause inserted before each pair's fetches
    pub fetch_delay: Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            quote_asset: "USDT".to_string(),
            timeframes: vec!["30m".to_string(), "1h".to_string(), "4h".to_string()],
            tolerance: 0.002,
            pair_limit: 100,
            candle_limit: 5,
            fetch_delay: Duration::from_millis(50),
        }
    }
}

fn validate_timeframes(timeframes: &[String]) -> Result<(), ValidationError> {
    if timeframes.iter().all(|tf| interval_code(tf).is_some()) {
        return Ok(());
    }

    let mut error = ValidationError::new("unsupported_timeframe");
    error.message = Some(
        format!(
            "timeframes must be among: {}",
            SUPPORTED_TIMEFRAMES.join(", ")
        )
        .into(),
    );
    Err(error)
}

fn validate_tolerance(tolerance: f64) -> Result<(), ValidationError> {
    if tolerance > 0.0 && tolerance <= 0.1 {
        return Ok(());
    }

    let mut error = ValidationError::new("tolerance_out_of_range");
    error.message = Some("tolerance must be a fraction in (0, 0.1]".into());
    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(ScanConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_tolerance_outside_range() {
        let mut config = ScanConfig::default();

        config.tolerance = 0.0;
        assert!(config.validate().is_err());

        config.tolerance = 0.5;
        assert!(config.validate().is_err());

        config.tolerance = 0.1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_empty_or_unknown_timeframes() {
        let mut config = ScanConfig::default();

        config.timeframes = vec![];
        assert!(config.validate().is_err());

        config.timeframes = vec!["10m".to_string()];
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("timeframes"));
    }

    #[test]
    fn rejects_out_of_range_limits() {
        let mut config = ScanConfig::default();

        config.pair_limit = 0;
        assert!(config.validate().is_err());

        config.pair_limit = 100;
        config.candle_limit = 2;
        assert!(config.validate().is_err());
    }
}
