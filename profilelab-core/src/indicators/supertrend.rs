//! Supertrend: ATR-based directional indicator.
//!
//! Inherently sequential: the line flips between support (lower band) and
//! resistance (upper band) when the close crosses the active band. Output
//! is the active band colored by direction plus a marker on every flip.

use serde::{Deserialize, Serialize};

use super::atr::{true_range, wilder_smooth};
use crate::domain::{Candle, ColoredPoint, Marker, BEARISH_COLOR, BULLISH_COLOR};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Supertrend {
    pub period: usize,
    pub multiplier: f64,
}

impl Default for Supertrend {
    fn default() -> Self {
        Self {
            period: 10,
            multiplier: 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupertrendOutput {
    pub line: Vec<ColoredPoint>,
    pub trends: Vec<Trend>,
    pub markers: Vec<Marker>,
}

impl Supertrend {
    pub fn new(period: usize, multiplier: f64) -> Self {
        Self { period, multiplier }
    }

    pub fn compute(&self, candles: &[Candle]) -> SupertrendOutput {
        let mut out = SupertrendOutput::default();
        let atr = wilder_smooth(&true_range(candles), self.period.max(1));

        let start = match atr.iter().position(|v| !v.is_nan()) {
            Some(idx) => idx,
            None => return out,
        };

        let hl2 = candles[start].hl2();
        let mut upper_band = hl2 + self.multiplier * atr[start];
        let mut lower_band = hl2 - self.multiplier * atr[start];
        let mut trend = Trend::Up;
        push(&mut out, candles[start].time, lower_band, trend);

        for i in (start + 1)..candles.len() {
            if atr[i].is_nan() {
                break;
            }
            let candle = &candles[i];
            let basic_upper = candle.hl2() + self.multiplier * atr[i];
            let basic_lower = candle.hl2() - self.multiplier * atr[i];
            let prev_close = candles[i - 1].close;

            // Upper band only tightens while price stays below it
            upper_band = if prev_close <= upper_band {
                basic_upper.min(upper_band)
            } else {
                basic_upper
            };
            lower_band = if prev_close >= lower_band {
                basic_lower.max(lower_band)
            } else {
                basic_lower
            };

            let next = match trend {
                Trend::Up if candle.close < lower_band => Trend::Down,
                Trend::Down if candle.close > upper_band => Trend::Up,
                t => t,
            };
            if next != trend {
                out.markers.push(match next {
                    Trend::Up => Marker::bullish(candle.time, "Buy"),
                    Trend::Down => Marker::bearish(candle.time, "Sell"),
                });
                trend = next;
            }

            let value = match trend {
                Trend::Up => lower_band,
                Trend::Down => upper_band,
            };
            push(&mut out, candle.time, value, trend);
        }

        out
    }
}

fn push(out: &mut SupertrendOutput, time: i64, value: f64, trend: Trend) {
    let color = match trend {
        Trend::Up => BULLISH_COLOR,
        Trend::Down => BEARISH_COLOR,
    };
    out.line.push(ColoredPoint {
        time,
        value,
        color: color.to_string(),
    });
    out.trends.push(trend);
}
