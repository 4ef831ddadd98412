//! Bollinger Bands: moving average +/- standard deviation multiplier.
//!
//! - Middle: SMA(close, period)
//! - Upper: middle + mult * stddev(close, period)
//! - Lower: middle - mult * stddev(close, period)
//!
//! Population stddev (divide by N) from a running sum and sum of squares,
//! updated in O(1) per candle. Variance is clamped at zero before the
//! square root.

use serde::{Deserialize, Serialize};

use crate::domain::{Candle, SeriesPoint};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bollinger {
    pub period: usize,
    pub multiplier: f64,
}

impl Default for Bollinger {
    fn default() -> Self {
        Self {
            period: 20,
            multiplier: 2.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BollingerOutput {
    pub upper: Vec<SeriesPoint>,
    pub middle: Vec<SeriesPoint>,
    pub lower: Vec<SeriesPoint>,
}

impl Bollinger {
    pub fn new(period: usize, multiplier: f64) -> Self {
        Self { period, multiplier }
    }

    pub fn compute(&self, candles: &[Candle]) -> BollingerOutput {
        let period = self.period.max(1);
        let n = candles.len();
        let mut out = BollingerOutput::default();

        if n < period {
            return out;
        }

        let len = period as f64;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;

        for (i, candle) in candles.iter().enumerate() {
            sum += candle.close;
            sum_sq += candle.close * candle.close;

            if i >= period {
                let outgoing = candles[i - period].close;
                sum -= outgoing;
                sum_sq -= outgoing * outgoing;
            }

            if i + 1 < period {
                continue;
            }

            let mean = sum / len;
            let variance = (sum_sq / len - mean * mean).max(0.0);
            let stddev = variance.sqrt();
            let time = candle.time;

            out.middle.push(SeriesPoint::new(time, mean));
            out.upper.push(SeriesPoint::new(time, mean + self.multiplier * stddev));
            out.lower.push(SeriesPoint::new(time, mean - self.multiplier * stddev));
        }

        out
    }
}
