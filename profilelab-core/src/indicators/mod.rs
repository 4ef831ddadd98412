//! Classic technical indicators.
//!
//! Single-series indicators implement [`Indicator`] and return NaN-padded
//! vectors aligned with the input. Multi-series studies (Bollinger,
//! Stochastic, ADX, Ichimoku, ...) are plain config structs with a
//! `compute` method returning a named-field output whose empty value is the
//! insufficient-data shape.

pub mod adx;
pub mod atr;
pub mod bollinger;
pub mod ema;
pub mod ichimoku;
pub mod indicator;
pub mod pivots;
pub mod rsi;
pub mod sma;
pub mod stochastic;
pub mod supertrend;
pub mod volume;
pub mod vwap;

pub use adx::{Adx, AdxOutput};
pub use atr::Atr;
pub use bollinger::{Bollinger, BollingerOutput};
pub use ema::Ema;
pub use ichimoku::{Ichimoku, IchimokuOutput};
pub use indicator::Indicator;
pub use pivots::{PivotFormula, PivotLevels, PivotOutput, PivotPoints, PivotTimeframe};
pub use rsi::Rsi;
pub use sma::Sma;
pub use stochastic::{Stochastic, StochasticOutput};
pub use supertrend::{Supertrend, SupertrendOutput, Trend};
pub use volume::{VolumeAnalysis, VolumeOutput};
pub use vwap::{
    Anchor, AnchoredVwap, Exchange, PriceSource, Vwap, VwapBands, VwapBandsOutput, VwapConfig,
};

/// Spacing of synthetic test candles (5 minutes).
#[cfg(test)]
pub const CANDLE_INTERVAL: i64 = 300;

/// Create synthetic candles from close prices for testing.
///
/// Starts 2024-01-02 09:15 exchange-local, one candle every 5 minutes.
/// open = prev_close (or close for the first candle),
/// high = max(open, close) + 1.0, low = min(open, close) - 1.0, volume = 1000.
#[cfg(test)]
pub fn make_candles(closes: &[f64]) -> Vec<crate::domain::Candle> {
    let rows: Vec<(f64, f64, f64, f64)> = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            (open, open.max(close) + 1.0, open.min(close) - 1.0, close)
        })
        .collect();
    make_ohlc_candles(&rows)
}

/// Candles from explicit (open, high, low, close) rows, same clock as
/// [`make_candles`].
#[cfg(test)]
pub fn make_ohlc_candles(rows: &[(f64, f64, f64, f64)]) -> Vec<crate::domain::Candle> {
    use crate::domain::Candle;
    let start = crate::session::test_support::at(crate::session::test_support::DAY_1, 9, 15);
    rows.iter()
        .enumerate()
        .map(|(i, &(open, high, low, close))| {
            Candle::new(start + i as i64 * CANDLE_INTERVAL, open, high, low, close)
                .with_volume(1000.0)
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
