use crate::models::alert::PatternLabel;
use crate::models::candle::Candle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

/// A candle closing exactly at its open counts as Down.
fn direction(candle: &Candle) -> Direction {
    if candle.close > candle.open {
        Direction::Up
    } else {
        Direction::Down
    }
}

/// Three-candle color-flip test over the most recent candles of a
/// series: Red-Green-Red closes bullish, Green-Red-Green closes
/// bearish, and the middle candle must re-touch the left candle's
/// high and low within `tolerance * c1.close`.
///
/// The left candle is the reference level for both the allowed
/// deviation and the equality test; the right candle only
/// contributes its color.
pub fn detect(candles: &[Candle], tolerance: f64) -> Option<PatternLabel> {
    if candles.len() < 3 {
        return None;
    }

    let window = &candles[candles.len() - 3..];
    let (c1, c2, c3) = (&window[0], &window[1], &window[2]);

    let label = match (direction(c1), direction(c2), direction(c3)) {
        (Direction::Down, Direction::Up, Direction::Down) => PatternLabel::BullishRgr,
        (Direction::Up, Direction::Down, Direction::Up) => PatternLabel::BearishGrg,
        _ => return None,
    };

    let allowed = c1.close * tolerance;
    let high_diff = (c2.high - c1.high).abs();
    let low_diff = (c2.low - c1.low).abs();

    if high_diff <= allowed && low_diff <= allowed {
        Some(label)
    } else {
        None
    }
}
