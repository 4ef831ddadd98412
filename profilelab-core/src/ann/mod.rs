//! ANN direction predictor.
//!
//! Each candle's feature is the fractional change of the running daily OHLC4
//! (day open, high and low so far, current close) against the previous
//! day's completed OHLC4. Only data up to the candle itself is used, so the
//! first calendar day in the input produces no predictions.

pub mod network;
pub mod signal;
mod weights;

pub use network::forward;
pub use signal::SignalState;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Candle, Marker, SeriesPoint};
use crate::session::group_by_calendar_day;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnPredictor {
    pub threshold: f64,
}

impl Default for AnnPredictor {
    fn default() -> Self {
        Self { threshold: 0.0014 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnOutput {
    /// Raw network output per candle.
    pub predictions: Vec<SeriesPoint>,
    /// One marker per state change.
    pub markers: Vec<Marker>,
    pub final_state: SignalState,
}

/// Running OHLC of a day.
#[derive(Debug, Clone, Copy)]
struct DayOhlc {
    open: f64,
    high: f64,
    low: f64,
    close: f64,
}

impl DayOhlc {
    fn start(candle: &Candle) -> Self {
        Self {
            open: candle.open,
            high: candle.high,
            low: candle.low,
            close: candle.close,
        }
    }

    fn push(&mut self, candle: &Candle) {
        self.high = self.high.max(candle.high);
        self.low = self.low.min(candle.low);
        self.close = candle.close;
    }

    fn ohlc4(&self) -> f64 {
        (self.open + self.high + self.low + self.close) / 4.0
    }
}

impl AnnPredictor {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Feature per candle; `None` where no previous day exists.
    pub fn features(candles: &[Candle]) -> Vec<(i64, Option<f64>)> {
        let mut out = Vec::with_capacity(candles.len());
        let mut previous: Option<f64> = None;

        for day in group_by_calendar_day(candles).iter() {
            let Some(first) = day.candles.first() else {
                continue;
            };
            let mut running = DayOhlc::start(first);
            for candle in &day.candles {
                running.push(candle);
                let feature = previous
                    .filter(|p| *p != 0.0)
                    .map(|p| (running.ohlc4() - p) / p);
                out.push((candle.time, feature));
            }
            previous = Some(running.ohlc4());
        }

        out
    }

    pub fn compute(&self, candles: &[Candle]) -> AnnOutput {
        let mut out = AnnOutput::default();
        let mut state = SignalState::Unset;

        for (time, feature) in Self::features(candles) {
            let Some(feature) = feature.filter(|f| f.is_finite()) else {
                continue;
            };
            let prediction = forward(feature);
            out.predictions.push(SeriesPoint::new(time, prediction));

            let next = state.transition(prediction, self.threshold);
            if next != state {
                debug!(time, ?next, prediction, "ann state change");
                match next {
                    SignalState::Long => out.markers.push(Marker::bullish(time, "Buy")),
                    SignalState::Short => out.markers.push(Marker::bearish(time, "Sell")),
                    SignalState::Unset => {}
                }
                state = next;
            }
        }

        out.final_state = state;
        out
    }
}
