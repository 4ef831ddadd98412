//! Simple Moving Average (SMA).
//!
//! Rolling sum, O(n). Lookback: period - 1.

use super::indicator::Indicator;
use crate::domain::Candle;

#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
    name: String,
}

impl Sma {
    /// A zero period is clamped to 1.
    pub fn new(period: usize) -> Self {
        let period = period.max(1);
        Self {
            period,
            name: format!("sma_{period}"),
        }
    }
}

impl Indicator for Sma {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period - 1
    }

    fn compute(&self, candles: &[Candle]) -> Vec<f64> {
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        sma_of_series(&closes, self.period)
    }
}

/// Rolling mean of an arbitrary series.
///
/// A NaN inside the window makes that output NaN; the window recovers once
/// the NaN slides out.
pub fn sma_of_series(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    let mut result = vec![f64::NAN; n];

    if period == 0 || n < period {
        return result;
    }

    let mut sum = 0.0;
    let mut nan_count = 0usize;
    for i in 0..n {
        let incoming = values[i];
        if incoming.is_nan() {
            nan_count += 1;
        } else {
            sum += incoming;
        }

        if i >= period {
            let outgoing = values[i - period];
            if outgoing.is_nan() {
                nan_count -= 1;
            } else {
                sum -= outgoing;
            }
        }

        if i + 1 >= period && nan_count == 0 {
            result[i] = sum / period as f64;
        }
    }

    result
}
