use std::num::ParseFloatError;

use serde::Deserialize;

/// One OHLCV bucket for a (symbol, timeframe), ordered ascending by
/// `open_time` within a series.
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    /// Candle open time (epoch ms)
    pub open_time: u64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Raw `/api/v3/klines` row. The exchange sends each candle as a JSON
/// array mixing integer timestamps with decimal strings:
/// `[openTime, open, high, low, close, volume, closeTime, quoteVolume]`.
#[derive(Debug, Clone, Deserialize)]
pub struct KlineRow(
    pub u64,
    pub String,
    pub String,
    pub String,
    pub String,
    pub String,
    pub u64,
    pub String,
);

impl TryFrom<KlineRow> for Candle {
    type Error = ParseFloatError;

    fn try_from(row: KlineRow) -> Result<Self, Self::Error> {
        let KlineRow(open_time, open, high, low, close, volume, _close_time, _quote_volume) = row;

        Ok(Self {
            open_time,
            open: open.parse()?,
            high: high.parse()?,
            low: low.parse()?,
            close: close.parse()?,
            volume: volume.parse()?,
        })
    }
}
