//! Relative Strength Index (RSI).
//!
//! Wilder smoothing: the first average gain/loss is the simple mean of the
//! first `period` close-to-close deltas, then
//! `avg = (avg * (period - 1) + new) / period`.
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss), and exactly 100 whenever
//! avg_loss is zero.
//! Lookback: period.

use super::indicator::Indicator;
use crate::domain::Candle;

#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
    name: String,
}

impl Rsi {
    /// A zero period is clamped to 1.
    pub fn new(period: usize) -> Self {
        let period = period.max(1);
        Self {
            period,
            name: format!("rsi_{period}"),
        }
    }
}

impl Indicator for Rsi {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn compute(&self, candles: &[Candle]) -> Vec<f64> {
        let n = candles.len();
        let mut result = vec![f64::NAN; n];

        if n < self.period + 1 {
            return result;
        }

        let period = self.period as f64;
        let mut avg_gain = 0.0;
        let mut avg_loss = 0.0;
        for i in 1..=self.period {
            let change = candles[i].close - candles[i - 1].close;
            if change.is_nan() {
                return result;
            }
            if change > 0.0 {
                avg_gain += change;
            } else {
                avg_loss -= change;
            }
        }
        avg_gain /= period;
        avg_loss /= period;

        result[self.period] = rsi_from_averages(avg_gain, avg_loss);

        for i in (self.period + 1)..n {
            let change = candles[i].close - candles[i - 1].close;
            if change.is_nan() {
                return result;
            }
            let gain = change.max(0.0);
            let loss = (-change).max(0.0);

            avg_gain = (avg_gain * (period - 1.0) + gain) / period;
            avg_loss = (avg_loss * (period - 1.0) + loss) / period;

            result[i] = rsi_from_averages(avg_gain, avg_loss);
        }

        result
    }
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}
