use std::fmt;

use serde::Serialize;

/// Which side of the color-flip matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PatternLabel {
    BullishRgr,
    BearishGrg,
}

impl PatternLabel {
    pub fn is_bullish(&self) -> bool {
        matches!(self, PatternLabel::BullishRgr)
    }
}

impl fmt::Display for PatternLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternLabel::BullishRgr => write!(f, "BULLISH RGR (Red-Green-Red)"),
            PatternLabel::BearishGrg => write!(f, "BEARISH GRG (Green-Red-Green)"),
        }
    }
}

/// One detected pattern. `price` is the latest close of the series
/// that matched.
#[derive(Debug, Clone, Serialize)]
pub struct PatternMatch {
    pub symbol: String,
    pub timeframe: String,
    pub pattern: PatternLabel,
    pub price: f64,
}

/// A (symbol, timeframe) fetch the scanner gave up on without
/// aborting the run.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFetch {
    pub symbol: String,
    pub timeframe: String,
    pub reason: String,
}

/// Outcome of one full scan, matches in discovery order.
#[derive(Debug, Default, Serialize)]
pub struct ScanReport {
    pub pairs_scanned: usize,
    pub matches: Vec<PatternMatch>,
    pub skipped: Vec<SkippedFetch>,
}
