//! First Red Candle.
//!
//! The first market-hours candle of the day that closes below its open
//! defines a high/low range. The day completes when a later candle closes
//! below that low.

use serde::{Deserialize, Serialize};

use super::trading_days;
use crate::domain::{Candle, Marker, SignalEvent, SignalKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FirstRedCandle;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirstRedCandleDay {
    pub date_str: String,
    pub candle: Candle,
    pub high: f64,
    pub low: f64,
    /// Level lines run from the red candle to the day's last candle.
    pub start_time: i64,
    pub end_time: i64,
    /// First later close below the red candle's low.
    pub breakdown: Option<SignalEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FirstRedCandleOutput {
    pub days: Vec<FirstRedCandleDay>,
    pub markers: Vec<Marker>,
}

impl FirstRedCandle {
    pub fn compute(&self, candles: &[Candle]) -> FirstRedCandleOutput {
        let mut out = FirstRedCandleOutput::default();

        for day in trading_days(candles) {
            let Some(pos) = day.candles.iter().position(Candle::is_red) else {
                continue;
            };
            let red = day.candles[pos];
            let end_time = day.last_time();
            if red.time == end_time {
                continue;
            }

            let breakdown = day.candles[pos + 1..]
                .iter()
                .find(|c| c.close < red.low)
                .map(|c| SignalEvent {
                    kind: SignalKind::Breakdown,
                    time: c.time,
                    price: c.close,
                });

            out.markers.push(Marker::note(red.time, "FRC"));
            if let Some(event) = &breakdown {
                out.markers.push(event.marker());
            }
            out.days.push(FirstRedCandleDay {
                date_str: day.date_str,
                candle: red,
                high: red.high,
                low: red.low,
                start_time: red.time,
                end_time,
                breakdown,
            });
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::test_support::{DAY_1, DAY_2};
    use crate::strategies::test_support::session;

    #[test]
    fn finds_first_red_and_breakdown() {
        let candles = session(
            DAY_1,
            &[
                (100.0, 102.0, 99.0, 101.0), // green
                (101.0, 103.0, 98.0, 99.0),  // first red: 103 / 98
                (99.0, 100.0, 97.0, 99.5),   // red too, ignored
                (99.0, 99.0, 96.0, 97.0),    // close 97 < 98
            ],
        );
        let out = FirstRedCandle.compute(&candles);
        assert_eq!(out.days.len(), 1);
        let day = &out.days[0];
        assert_eq!((day.high, day.low), (103.0, 98.0));
        assert_eq!(day.start_time, candles[1].time);
        assert_eq!(day.end_time, candles[3].time);
        assert_eq!(day.breakdown.unwrap().time, candles[3].time);
        assert_eq!(out.markers.len(), 2);
    }

    #[test]
    fn day_without_red_candle_is_absent() {
        let mut candles = session(DAY_1, &[(100.0, 102.0, 99.0, 101.0), (101.0, 103.0, 100.0, 102.0)]);
        candles.extend(session(
            DAY_2,
            &[(100.0, 102.0, 99.0, 99.5), (99.5, 100.0, 98.0, 99.0)],
        ));
        let out = FirstRedCandle.compute(&candles);
        assert_eq!(out.days.len(), 1);
        assert_eq!(out.days[0].date_str, "2024-01-03");
    }

    #[test]
    fn red_candle_at_day_end_is_degenerate() {
        let candles = session(DAY_1, &[(100.0, 102.0, 99.0, 101.0), (101.0, 103.0, 98.0, 99.0)]);
        assert!(FirstRedCandle.compute(&candles).days.is_empty());
    }
}
