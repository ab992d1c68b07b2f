use crate::business_logic::config::ScanConfig;
use crate::business_logic::pattern::detect;
use crate::business_logic::selector::select_pairs;
use crate::errors::ScanError;
use crate::models::alert::{PatternMatch, ScanReport, SkippedFetch};
use crate::services::mexc::MarketData;

/// Runs one full scan: rank pairs, walk pairs x timeframes, collect
/// matches. Strictly sequential; the only temporal control is the
/// configured pause before each pair's fetches.
pub struct Scanner<M> {
    client: M,
    config: ScanConfig,
}

impl<M: MarketData> Scanner<M> {
    pub fn new(client: M, config: ScanConfig) -> Self {
        Self { client, config }
    }

    /// Only the ticker listing can fail the run. Per-(pair, timeframe)
    /// failures are recorded in the report and skipped.
    pub async fn run(&self) -> Result<ScanReport, ScanError> {
        let tickers = self.client.fetch_tickers().await?;
        let pairs = select_pairs(&tickers, &self.config);
        tracing::info!(
            "scanning top {} {} pairs across {:?}",
            pairs.len(),
            self.config.quote_asset,
            self.config.timeframes
        );

        let mut report = ScanReport {
            pairs_scanned: pairs.len(),
            ..ScanReport::default()
        };

        for symbol in &pairs {
            tokio::time::sleep(self.config.fetch_delay).await;

            for timeframe in &self.config.timeframes {
                match self.scan_one(symbol, timeframe).await {
                    Ok(Some(found)) => {
                        tracing::info!(
                            "found: {} [{}] {} @ {}",
                            found.symbol,
                            found.timeframe,
                            found.pattern,
                            found.price
                        );
                        report.matches.push(found);
                    }
                    Ok(None) => {}
                    Err(error) => {
                        tracing::debug!("skipping {} [{}]: {}", symbol, timeframe, error);
                        report.skipped.push(SkippedFetch {
                            symbol: symbol.clone(),
                            timeframe: timeframe.clone(),
                            reason: error.to_string(),
                        });
                    }
                }
            }
        }

        Ok(report)
    }

    async fn scan_one(
        &self,
        symbol: &str,
        timeframe: &str,
    ) -> Result<Option<PatternMatch>, ScanError> {
        let candles = self
            .client
            .fetch_candles(symbol, timeframe, self.config.candle_limit)
            .await?;

        Ok(detect(&candles, self.config.tolerance).and_then(|pattern| {
            candles.last().map(|last| PatternMatch {
                symbol: symbol.to_string(),
                timeframe: timeframe.to_string(),
                pattern,
                price: last.close,
            })
        }))
    }
}
