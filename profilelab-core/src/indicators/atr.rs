//! Average True Range (ATR).
//!
//! True Range: max(high-low, |high-prev_close|, |low-prev_close|)
//! ATR uses Wilder smoothing (alpha = 1/period).
//! Lookback: period - 1 (TR[0] is high - low).

use super::indicator::Indicator;
use crate::domain::Candle;

#[derive(Debug, Clone)]
pub struct Atr {
    period: usize,
    name: String,
}

impl Atr {
    /// A zero period is clamped to 1.
    pub fn new(period: usize) -> Self {
        let period = period.max(1);
        Self {
            period,
            name: format!("atr_{period}"),
        }
    }
}

impl Indicator for Atr {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period - 1
    }

    fn compute(&self, candles: &[Candle]) -> Vec<f64> {
        wilder_smooth(&true_range(candles), self.period)
    }
}

/// TR[0] = high[0] - low[0] (no previous close).
/// TR[t] = max(high[t]-low[t], |high[t]-close[t-1]|, |low[t]-close[t-1]|).
pub fn true_range(candles: &[Candle]) -> Vec<f64> {
    candles
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let hl = c.high - c.low;
            if i == 0 {
                return hl;
            }
            let pc = candles[i - 1].close;
            hl.max((c.high - pc).abs()).max((c.low - pc).abs())
        })
        .collect()
}

/// Wilder smoothing. Seed: mean of the first `period` consecutive non-NaN
/// values; afterwards `prev + (v - prev) / period`.
pub fn wilder_smooth(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    let mut result = vec![f64::NAN; n];

    if n < period || period == 0 {
        return result;
    }

    // First run of `period` consecutive valid values
    let mut run = 0;
    let mut seed_end = None;
    for (i, v) in values.iter().enumerate() {
        if v.is_nan() {
            run = 0;
            continue;
        }
        run += 1;
        if run == period {
            seed_end = Some(i + 1);
            break;
        }
    }

    let seed_end = match seed_end {
        Some(e) => e,
        None => return result,
    };

    let seed: f64 = values[seed_end - period..seed_end].iter().sum::<f64>() / period as f64;
    result[seed_end - 1] = seed;

    let alpha = 1.0 / period as f64;
    let mut prev = seed;
    for i in seed_end..n {
        if values[i].is_nan() {
            return result;
        }
        prev = alpha * values[i] + (1.0 - alpha) * prev;
        result[i] = prev;
    }

    result
}
