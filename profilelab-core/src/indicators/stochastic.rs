//! Stochastic oscillator.
//!
//! raw %K = 100 * (close - lowest_low) / (highest_high - lowest_low) over
//! `k_period` candles; a zero range gives 50. %K is the SMA of raw %K over
//! `k_smoothing`, %D the SMA of %K over `d_period`.

use serde::{Deserialize, Serialize};

use super::sma::sma_of_series;
use crate::domain::{to_points, Candle, SeriesPoint};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stochastic {
    pub k_period: usize,
    pub k_smoothing: usize,
    pub d_period: usize,
}

impl Default for Stochastic {
    fn default() -> Self {
        Self {
            k_period: 14,
            k_smoothing: 3,
            d_period: 3,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StochasticOutput {
    pub k: Vec<SeriesPoint>,
    pub d: Vec<SeriesPoint>,
}

impl Stochastic {
    pub fn new(k_period: usize, k_smoothing: usize, d_period: usize) -> Self {
        Self {
            k_period,
            k_smoothing,
            d_period,
        }
    }

    pub fn compute(&self, candles: &[Candle]) -> StochasticOutput {
        let k_period = self.k_period.max(1);
        let n = candles.len();
        if n < k_period {
            return StochasticOutput::default();
        }

        let raw = raw_k(candles, k_period);
        let k = sma_of_series(&raw, self.k_smoothing.max(1));
        let d = sma_of_series(&k, self.d_period.max(1));

        let times = || candles.iter().map(|c| c.time);
        StochasticOutput {
            k: to_points(times(), &k),
            d: to_points(times(), &d),
        }
    }
}

fn raw_k(candles: &[Candle], period: usize) -> Vec<f64> {
    let mut raw = vec![f64::NAN; candles.len()];
    for i in (period - 1)..candles.len() {
        let window = &candles[i + 1 - period..=i];
        let highest = window.iter().map(|c| c.high).fold(f64::NEG_INFINITY, f64::max);
        let lowest = window.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
        let range = highest - lowest;
        raw[i] = if range == 0.0 {
            50.0
        } else {
            100.0 * (candles[i].close - lowest) / range
        };
    }
    raw
}
