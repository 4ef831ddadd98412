//! Opening Range Breakout.
//!
//! High and low of the candles inside the opening window (09:30-10:00 by
//! default, end exclusive); afterwards the first close above the high is the
//! breakout and the first close below the low the breakdown. Every recorded
//! day gets an `ORB` range marker on its first window candle.

use serde::{Deserialize, Serialize};

use super::{first_breaks, trading_days};
use crate::domain::{Candle, Marker, SignalEvent};
use crate::session::{minutes_since_midnight, TimeOfDay};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeBreakout {
    pub range_start: TimeOfDay,
    pub range_end: TimeOfDay,
}

impl Default for RangeBreakout {
    fn default() -> Self {
        Self {
            range_start: TimeOfDay::from_hm(9, 30),
            range_end: TimeOfDay::from_hm(10, 0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeBreakoutDay {
    pub date_str: String,
    pub range_high: f64,
    pub range_low: f64,
    pub start_time: i64,
    pub end_time: i64,
    pub breakout: Option<SignalEvent>,
    pub breakdown: Option<SignalEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeBreakoutOutput {
    pub days: Vec<RangeBreakoutDay>,
    pub markers: Vec<Marker>,
}

impl RangeBreakout {
    pub fn compute(&self, candles: &[Candle]) -> RangeBreakoutOutput {
        let mut out = RangeBreakoutOutput::default();
        let start = self.range_start.minutes();
        let end = self.range_end.minutes();

        for day in trading_days(candles) {
            let in_range: Vec<&Candle> = day
                .candles
                .iter()
                .filter(|c| (start..end).contains(&minutes_since_midnight(c.time)))
                .collect();
            let (Some(first), Some(last)) = (in_range.first(), in_range.last()) else {
                continue;
            };
            let end_time = day.last_time();
            if first.time == end_time {
                continue;
            }

            let range_high = in_range.iter().map(|c| c.high).fold(f64::NEG_INFINITY, f64::max);
            let range_low = in_range.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);

            let after: Vec<Candle> = day
                .candles
                .iter()
                .filter(|c| c.time > last.time)
                .copied()
                .collect();
            let (breakout, breakdown) = first_breaks(&after, range_high, range_low);

            out.markers.push(Marker::range(first.time, "ORB"));
            out.markers.extend(breakout.iter().map(SignalEvent::marker));
            out.markers.extend(breakdown.iter().map(SignalEvent::marker));
            out.days.push(RangeBreakoutDay {
                date_str: day.date_str.clone(),
                range_high,
                range_low,
                start_time: first.time,
                end_time,
                breakout,
                breakdown,
            });
        }

        out
    }
}
