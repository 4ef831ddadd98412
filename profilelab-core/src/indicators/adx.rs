//! ADX: Average Directional Index (Wilder).
//!
//! Steps:
//! 1. Compute +DM and -DM from consecutive candles
//! 2. Smooth +DM, -DM, and TR using Wilder smoothing
//! 3. +DI = 100 * smoothed(+DM) / smoothed(TR), -DI likewise
//! 4. DX = 100 * |+DI - -DI| / (+DI + -DI)
//! 5. ADX = Wilder-smoothed DX
//!
//! First ADX value lands on candle 2 * period - 1.

use serde::{Deserialize, Serialize};

use super::atr::{true_range, wilder_smooth};
use crate::domain::{to_points, Candle, SeriesPoint};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Adx {
    pub period: usize,
}

impl Default for Adx {
    fn default() -> Self {
        Self { period: 14 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdxOutput {
    pub adx: Vec<SeriesPoint>,
    pub plus_di: Vec<SeriesPoint>,
    pub minus_di: Vec<SeriesPoint>,
}

impl Adx {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    pub fn compute(&self, candles: &[Candle]) -> AdxOutput {
        let period = self.period.max(1);
        let n = candles.len();
        if n < period + 1 {
            return AdxOutput::default();
        }

        let mut plus_dm = vec![f64::NAN; n];
        let mut minus_dm = vec![f64::NAN; n];
        let mut tr = true_range(candles);
        tr[0] = f64::NAN;

        for i in 1..n {
            let up = candles[i].high - candles[i - 1].high;
            let down = candles[i - 1].low - candles[i].low;
            plus_dm[i] = if up > down && up > 0.0 { up } else { 0.0 };
            minus_dm[i] = if down > up && down > 0.0 { down } else { 0.0 };
        }

        let smooth_tr = wilder_smooth(&tr, period);
        let smooth_plus = wilder_smooth(&plus_dm, period);
        let smooth_minus = wilder_smooth(&minus_dm, period);

        let mut plus_di = vec![f64::NAN; n];
        let mut minus_di = vec![f64::NAN; n];
        let mut dx = vec![f64::NAN; n];
        for i in 0..n {
            if smooth_tr[i].is_nan() {
                continue;
            }
            if smooth_tr[i] == 0.0 {
                plus_di[i] = 0.0;
                minus_di[i] = 0.0;
                dx[i] = 0.0;
                continue;
            }
            plus_di[i] = 100.0 * smooth_plus[i] / smooth_tr[i];
            minus_di[i] = 100.0 * smooth_minus[i] / smooth_tr[i];
            let sum = plus_di[i] + minus_di[i];
            dx[i] = if sum == 0.0 {
                0.0
            } else {
                100.0 * (plus_di[i] - minus_di[i]).abs() / sum
            };
        }

        let adx = wilder_smooth(&dx, period);
        let times = || candles.iter().map(|c| c.time);
        AdxOutput {
            adx: to_points(times(), &adx),
            plus_di: to_points(times(), &plus_di),
            minus_di: to_points(times(), &minus_di),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::make_ohlc_candles;

    fn trending(n: usize, step: f64) -> Vec<Candle> {
        let rows: Vec<_> = (0..n)
            .map(|i| {
                let base = 100.0 + i as f64 * step;
                (base, base + 1.0, base - 1.0, base + step / 2.0)
            })
            .collect();
        make_ohlc_candles(&rows)
    }

    #[test]
    fn strong_uptrend_has_plus_di_dominant() {
        let candles = trending(40, 2.0);
        let out = Adx::new(5).compute(&candles);
        let last_plus = out.plus_di.last().unwrap().value;
        let last_minus = out.minus_di.last().unwrap().value;
        assert!(last_plus > last_minus);
        assert!(out.adx.last().unwrap().value > 50.0);
    }

    #[test]
    fn first_adx_value_position() {
        let candles = trending(30, 1.0);
        let out = Adx::new(5).compute(&candles);
        // DI from candle 5, ADX after another 5 DX values
        assert_eq!(out.plus_di.first().unwrap().time, candles[5].time);
        assert_eq!(out.adx.first().unwrap().time, candles[9].time);
    }

    #[test]
    fn adx_bounded() {
        let candles = trending(40, -1.5);
        let out = Adx::new(7).compute(&candles);
        assert!(out.adx.iter().all(|p| (0.0..=100.0).contains(&p.value)));
    }

    #[test]
    fn short_input_empty() {
        let candles = trending(3, 1.0);
        assert_eq!(Adx::new(5).compute(&candles), AdxOutput::default());
    }
}
