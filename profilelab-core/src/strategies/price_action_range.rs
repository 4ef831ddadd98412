//! Price Action Range.
//!
//! The day's first candle fixes one side immediately: a green (or flat)
//! first candle sets support at its low and leaves resistance pending until
//! the first red candle, whose high becomes resistance. A red first candle
//! is the mirror image. Once both levels exist the rest of the day is
//! scanned for the first close above resistance and the first close below
//! support.

use serde::{Deserialize, Serialize};

use super::{first_breaks, trading_days};
use crate::domain::{Candle, CandleColor, Marker, SignalEvent};

/// Range construction state for one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ParState {
    AwaitingResistance { support: f64 },
    AwaitingSupport { resistance: f64 },
    Armed { support: f64, resistance: f64 },
}

impl ParState {
    pub fn open(first: &Candle) -> Self {
        match first.color() {
            CandleColor::Red => ParState::AwaitingSupport {
                resistance: first.high,
            },
            CandleColor::Green | CandleColor::Doji => ParState::AwaitingResistance {
                support: first.low,
            },
        }
    }

    /// Feed one later candle of the same day.
    pub fn step(self, candle: &Candle) -> Self {
        match (self, candle.color()) {
            (ParState::AwaitingResistance { support }, CandleColor::Red) => ParState::Armed {
                support,
                resistance: candle.high,
            },
            (ParState::AwaitingSupport { resistance }, CandleColor::Green) => ParState::Armed {
                support: candle.low,
                resistance,
            },
            (state, _) => state,
        }
    }

    pub fn support(self) -> Option<f64> {
        match self {
            ParState::AwaitingResistance { support } | ParState::Armed { support, .. } => {
                Some(support)
            }
            ParState::AwaitingSupport { .. } => None,
        }
    }

    pub fn resistance(self) -> Option<f64> {
        match self {
            ParState::AwaitingSupport { resistance } | ParState::Armed { resistance, .. } => {
                Some(resistance)
            }
            ParState::AwaitingResistance { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceActionRange;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParDay {
    pub date_str: String,
    pub first_candle: Candle,
    pub support: Option<f64>,
    pub resistance: Option<f64>,
    /// Time of the candle that completed the range, if any.
    pub completed_at: Option<i64>,
    pub start_time: i64,
    pub end_time: i64,
    pub breakout: Option<SignalEvent>,
    pub breakdown: Option<SignalEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceActionRangeOutput {
    pub days: Vec<ParDay>,
    pub markers: Vec<Marker>,
}

impl PriceActionRange {
    pub fn compute(&self, candles: &[Candle]) -> PriceActionRangeOutput {
        let mut out = PriceActionRangeOutput::default();

        for day in trading_days(candles) {
            let first = day.candles[0];
            let mut state = ParState::open(&first);
            let mut completed_at = None;

            for (i, candle) in day.candles.iter().enumerate().skip(1) {
                state = state.step(candle);
                if let ParState::Armed { .. } = state {
                    completed_at = Some(i);
                    break;
                }
            }

            let (breakout, breakdown) = match (state, completed_at) {
                (
                    ParState::Armed {
                        support,
                        resistance,
                    },
                    Some(i),
                ) => first_breaks(&day.candles[i + 1..], resistance, support),
                _ => (None, None),
            };

            out.markers.push(Marker::note(first.time, "PAR"));
            out.markers.extend(breakout.iter().map(SignalEvent::marker));
            out.markers.extend(breakdown.iter().map(SignalEvent::marker));

            out.days.push(ParDay {
                first_candle: first,
                support: state.support(),
                resistance: state.resistance(),
                completed_at: completed_at.map(|i| day.candles[i].time),
                start_time: first.time,
                end_time: day.last_time(),
                breakout,
                breakdown,
                date_str: day.date_str,
            });
        }

        out
    }
}
