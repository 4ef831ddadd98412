//! Ichimoku Kinko Hyo.
//!
//! - Tenkan-sen: midpoint of the highest high / lowest low over `conversion`
//! - Kijun-sen: same over `base`
//! - Senkou Span A: (tenkan + kijun) / 2, shifted forward
//! - Senkou Span B: midpoint over `span_b`, shifted forward
//! - Chikou: close, shifted backward
//!
//! The shift is `displacement * interval`, where the interval is inferred
//! from the first two candles.

use serde::{Deserialize, Serialize};

use crate::domain::{Candle, SeriesPoint};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ichimoku {
    pub conversion: usize,
    pub base: usize,
    pub span_b: usize,
    pub displacement: usize,
}

impl Default for Ichimoku {
    fn default() -> Self {
        Self {
            conversion: 9,
            base: 26,
            span_b: 52,
            displacement: 26,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IchimokuOutput {
    pub tenkan: Vec<SeriesPoint>,
    pub kijun: Vec<SeriesPoint>,
    pub senkou_a: Vec<SeriesPoint>,
    pub senkou_b: Vec<SeriesPoint>,
    pub chikou: Vec<SeriesPoint>,
}

/// Midpoint of the window ending at `end` (inclusive), if it fits.
fn midpoint(candles: &[Candle], end: usize, period: usize) -> Option<f64> {
    if end + 1 < period {
        return None;
    }
    let window = &candles[end + 1 - period..=end];
    let high = window.iter().map(|c| c.high).fold(f64::NEG_INFINITY, f64::max);
    let low = window.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
    Some((high + low) / 2.0)
}

impl Ichimoku {
    pub fn compute(&self, candles: &[Candle]) -> IchimokuOutput {
        let mut out = IchimokuOutput::default();
        if candles.len() < 2 {
            return out;
        }

        let conversion = self.conversion.max(1);
        let base = self.base.max(1);
        let span_b = self.span_b.max(1);
        let interval = candles[1].time - candles[0].time;
        let shift = self.displacement as i64 * interval;

        for (i, candle) in candles.iter().enumerate() {
            let tenkan = midpoint(candles, i, conversion);
            let kijun = midpoint(candles, i, base);

            if let Some(t) = tenkan {
                out.tenkan.push(SeriesPoint::new(candle.time, t));
            }
            if let Some(k) = kijun {
                out.kijun.push(SeriesPoint::new(candle.time, k));
            }
            if let (Some(t), Some(k)) = (tenkan, kijun) {
                out.senkou_a
                    .push(SeriesPoint::new(candle.time + shift, (t + k) / 2.0));
            }
            if let Some(b) = midpoint(candles, i, span_b) {
                out.senkou_b.push(SeriesPoint::new(candle.time + shift, b));
            }
            out.chikou
                .push(SeriesPoint::new(candle.time - shift, candle.close));
        }

        out
    }
}
