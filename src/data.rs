use chrono::{DateTime, Utc};
use serde::Serialize;

/// Single observation in a chronological price series.
///
/// Timestamps are expected to be non-decreasing; the analysis functions only
/// need them for meaningful chronological output, not for correctness.
#[derive(Debug, Clone, Serialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

/// Direction of the raw price change between a sample and its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// One fully populated momentum sample, aligned 1:1 with the input series.
///
/// `trend` is `None` only at index 0, which has no prior price to diff
/// against.
#[derive(Debug, Clone, Serialize)]
pub struct MomentumSample {
    pub ema_fast: f64,
    pub ema_slow: f64,
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    pub trend: Option<Trend>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LevelLabel {
    Support,
    Resistance,
    Neutral,
}

/// Classification verdict for one detected level, with the neighbor-pattern
/// tallies that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedLevel {
    pub price: f64,
    pub label: LevelLabel,
    pub support_touches: usize,
    pub resistance_touches: usize,
    pub neutral_touches: usize,
}

impl ClassifiedLevel {
    pub fn touches(&self) -> usize {
        self.support_touches + self.resistance_touches + self.neutral_touches
    }
}
