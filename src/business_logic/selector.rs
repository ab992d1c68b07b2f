use std::cmp::Ordering;

use crate::business_logic::config::ScanConfig;
use crate::models::ticker::{PairCandidate, TickerStats};

/// Leveraged-token suffixes; these track a synthetic instrument, not
/// the spot asset.
const LEVERAGED_MARKERS: [&str; 2] = ["3L", "3S"];

/// Rank tradable pairs by 24h quote volume and keep the top
/// `pair_limit` symbols.
///
/// Equal volumes order lexicographically by symbol so selection is
/// reproducible regardless of exchange response ordering.
pub fn select_pairs(tickers: &[TickerStats], config: &ScanConfig) -> Vec<String> {
    let quote_suffix = format!("/{}", config.quote_asset);

    let mut candidates: Vec<PairCandidate> = tickers
        .iter()
        .filter(|ticker| ticker.symbol.contains(&quote_suffix))
        .filter(|ticker| {
            !LEVERAGED_MARKERS
                .iter()
                .any(|marker| ticker.symbol.contains(marker))
        })
        .filter_map(|ticker| {
            ticker.quote_volume.map(|quote_volume| PairCandidate {
                symbol: ticker.symbol.clone(),
                quote_volume,
            })
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.quote_volume
            .partial_cmp(&a.quote_volume)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.symbol.cmp(&b.symbol))
    });
    candidates.truncate(config.pair_limit);

    candidates
        .into_iter()
        .map(|candidate| candidate.symbol)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_ticker(symbol: &str, quote_volume: Option<f64>) -> TickerStats {
        TickerStats {
            symbol: symbol.to_string(),
            quote_volume,
        }
    }

    fn make_config(pair_limit: usize) -> ScanConfig {
        ScanConfig {
            pair_limit,
            ..ScanConfig::default()
        }
    }

    #[test]
    fn ranks_by_volume_and_excludes_leveraged_tokens() {
        let tickers = vec![
            make_ticker("BTC/USDT", Some(5000.0)),
            make_ticker("3L-FOO/USDT", Some(9000.0)),
            make_ticker("ETH/USDT", Some(100.0)),
        ];

        let pairs = select_pairs(&tickers, &make_config(2));
        assert_eq!(pairs, vec!["BTC/USDT", "ETH/USDT"]);
    }

    #[test]
    fn excludes_short_leveraged_tokens_and_other_quotes() {
        let tickers = vec![
            make_ticker("BTC3S/USDT", Some(9000.0)),
            make_ticker("BTC/USDC", Some(8000.0)),
            make_ticker("BTCUSDT", Some(7000.0)),
            make_ticker("ETH/USDT", Some(100.0)),
        ];

        let pairs = select_pairs(&tickers, &make_config(100));
        assert_eq!(pairs, vec!["ETH/USDT"]);
    }

    #[test]
    fn drops_entries_without_a_volume_figure() {
        let tickers = vec![
            make_ticker("BTC/USDT", None),
            make_ticker("ETH/USDT", Some(100.0)),
        ];

        let pairs = select_pairs(&tickers, &make_config(100));
        assert_eq!(pairs, vec!["ETH/USDT"]);
    }

    #[test]
    fn never_returns_more_than_the_limit() {
        let tickers: Vec<TickerStats> = (0..250)
            .map(|i| make_ticker(&format!("COIN{i}/USDT"), Some(i as f64)))
            .collect();

        let pairs = select_pairs(&tickers, &make_config(100));
        assert_eq!(pairs.len(), 100);
    }

    #[test]
    fn equal_volumes_tie_break_lexicographically() {
        let tickers = vec![
            make_ticker("ZEC/USDT", Some(100.0)),
            make_ticker("ADA/USDT", Some(100.0)),
            make_ticker("LTC/USDT", Some(100.0)),
        ];

        let pairs = select_pairs(&tickers, &make_config(100));
        assert_eq!(pairs, vec!["ADA/USDT", "LTC/USDT", "ZEC/USDT"]);
    }

    #[test]
    fn empty_ticker_set_selects_nothing() {
        assert!(select_pairs(&[], &make_config(100)).is_empty());
    }
}
