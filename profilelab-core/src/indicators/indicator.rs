//! Indicator trait.
//!
//! Indicators are pure functions: candle history in, numeric series out.
//! `compute` returns a NaN-padded vector aligned with the input; `series`
//! drops the warmup and stamps each value with the time of the last candle
//! in its window.

use crate::domain::{to_points, Candle, SeriesPoint};

/// Single-series indicator.
///
/// # Look-ahead contamination guard
/// No value at candle t may depend on candle t+1 or later. Every indicator
/// must pass the truncated-vs-full series test.
pub trait Indicator: Send + Sync {
    /// Human-readable name (e.g., "sma_20", "rsi_14").
    fn name(&self) -> &str;

    /// Number of candles consumed before the first valid value.
    fn lookback(&self) -> usize;

    /// Compute over the whole sequence. Same length as `candles`; the first
    /// `lookback()` entries are `f64::NAN`.
    fn compute(&self, candles: &[Candle]) -> Vec<f64>;

    /// Plot-ready points with the warmup removed.
    fn series(&self, candles: &[Candle]) -> Vec<SeriesPoint> {
        let values = self.compute(candles);
        to_points(candles.iter().map(|c| c.time), &values)
    }
}
