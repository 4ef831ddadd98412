//! Candle: the fundamental market data unit.

use serde::{Deserialize, Serialize};

/// OHLCV candle keyed by epoch seconds.
///
/// Timestamps are already shifted to exchange-local time: reading the UTC
/// fields of `time` yields the exchange wall clock. Sequences are sorted
/// ascending by `time` with no duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

/// Body color of a candle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandleColor {
    Green,
    Red,
    Doji,
}

impl Candle {
    pub fn new(time: i64, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume: None,
        }
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    /// Volume, treating a missing value as zero.
    pub fn volume_or_zero(&self) -> f64 {
        self.volume.unwrap_or(0.0)
    }

    pub fn color(&self) -> CandleColor {
        if self.close > self.open {
            CandleColor::Green
        } else if self.close < self.open {
            CandleColor::Red
        } else {
            CandleColor::Doji
        }
    }

    pub fn is_red(&self) -> bool {
        self.close < self.open
    }

    pub fn hl2(&self) -> f64 {
        (self.high + self.low) / 2.0
    }

    pub fn hlc3(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    pub fn ohlc4(&self) -> f64 {
        (self.open + self.high + self.low + self.close) / 4.0
    }

    /// Returns true if any OHLC field is NaN.
    pub fn is_void(&self) -> bool {
        self.open.is_nan() || self.high.is_nan() || self.low.is_nan() || self.close.is_nan()
    }

    /// Basic OHLC sanity check: high is the maximum, low the minimum.
    pub fn is_sane(&self) -> bool {
        if self.is_void() {
            return false;
        }
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
    }
}
