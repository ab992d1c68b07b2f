use async_trait::async_trait;

use crate::errors::ScanError;
use crate::models::candle::{Candle, KlineRow};
use crate::models::ticker::TickerStats;

const MEXC_API_URL: &str = "https://api.mexc.com";

pub const SUPPORTED_TIMEFRAMES: [&str; 9] = [
    "1m", "5m", "15m", "30m", "1h", "4h", "1d", "1w", "1M",
];

/// MEXC interval code for a display timeframe. The spot API spells
/// the hourly interval `60m` and capitalizes week and month.
pub fn interval_code(timeframe: &str) -> Option<&'static str> {
    match timeframe {
        "1m" => Some("1m"),
        "5m" => Some("5m"),
        "15m" => Some("15m"),
        "30m" => Some("30m"),
        "1h" => Some("60m"),
        "4h" => Some("4h"),
        "1d" => Some("1d"),
        "1w" => Some("1W"),
        "1M" => Some("1M"),
        _ => None,
    }
}

/// Exchange connectivity as the scanner sees it. Listing failures are
/// fatal to a run; candle fetch failures are per-call.
#[async_trait]
pub trait MarketData {
    async fn fetch_tickers(&self) -> Result<Vec<TickerStats>, ScanError>;

    async fn fetch_candles(
        &self,
        symbol: &str,
        timeframe: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, ScanError>;
}

/// MEXC spot REST client. Symbols cross this boundary in `BASE/QUOTE`
/// form; the exchange's concatenated form stays internal.
#[derive(Clone)]
pub struct MexcClient {
    client: reqwest::Client,
    quote_asset: String,
}

impl MexcClient {
    pub fn new(quote_asset: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            quote_asset: quote_asset.to_string(),
        }
    }

    /// `BTCUSDT` becomes `BTC/USDT` when the configured quote asset
    /// matches; other symbols keep their native form (and are then
    /// filtered out by pair selection).
    fn display_symbol(&self, native: &str) -> String {
        match native.strip_suffix(&self.quote_asset) {
            Some(base) if !base.is_empty() => format!("{}/{}", base, self.quote_asset),
            _ => native.to_string(),
        }
    }
}

#[async_trait]
impl MarketData for MexcClient {
    async fn fetch_tickers(&self) -> Result<Vec<TickerStats>, ScanError> {
        let url = format!("{MEXC_API_URL}/api/v3/ticker/24hr");

        let mut tickers: Vec<TickerStats> = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ScanError::Connectivity)?
            .error_for_status()
            .map_err(ScanError::Connectivity)?
            .json()
            .await
            .map_err(ScanError::Connectivity)?;

        for ticker in &mut tickers {
            ticker.symbol = self.display_symbol(&ticker.symbol);
        }

        Ok(tickers)
    }

    async fn fetch_candles(
        &self,
        symbol: &str,
        timeframe: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, ScanError> {
        let interval = interval_code(timeframe)
            .ok_or_else(|| ScanError::fetch(symbol, timeframe, "unsupported timeframe"))?;
        let url = format!("{MEXC_API_URL}/api/v3/klines");

        let rows: Vec<KlineRow> = self
            .client
            .get(&url)
            .query(&[
                ("symbol", native_symbol(symbol)),
                ("interval", interval.to_string()),
                ("limit", limit.to_string()),
            ])
            .send()
            .await
            .map_err(|error| ScanError::fetch(symbol, timeframe, error))?
            .error_for_status()
            .map_err(|error| ScanError::fetch(symbol, timeframe, error))?
            .json()
            .await
            .map_err(|error| ScanError::fetch(symbol, timeframe, error))?;

        rows.into_iter()
            .map(|row| {
                Candle::try_from(row).map_err(|error| ScanError::fetch(symbol, timeframe, error))
            })
            .collect()
    }
}

/// `BTC/USDT` back to the exchange's concatenated form.
fn native_symbol(symbol: &str) -> String {
    symbol.replace('/', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_code_covers_all_supported_timeframes() {
        for timeframe in SUPPORTED_TIMEFRAMES {
            assert!(
                interval_code(timeframe).is_some(),
                "missing timeframe: {}",
                timeframe
            );
        }
    }

    #[test]
    fn interval_code_maps_hourly_to_exchange_spelling() {
        assert_eq!(interval_code("1h"), Some("60m"));
        assert_eq!(interval_code("30m"), Some("30m"));
        assert_eq!(interval_code("10m"), None);
    }

    #[test]
    fn symbols_round_trip_between_display_and_native_form() {
        let client = MexcClient::new("USDT");

        assert_eq!(client.display_symbol("BTCUSDT"), "BTC/USDT");
        assert_eq!(native_symbol("BTC/USDT"), "BTCUSDT");
    }

    #[test]
    fn foreign_quote_symbols_keep_their_native_form() {
        let client = MexcClient::new("USDT");

        assert_eq!(client.display_symbol("BTCUSDC"), "BTCUSDC");
        assert_eq!(client.display_symbol("USDT"), "USDT");
    }
}
