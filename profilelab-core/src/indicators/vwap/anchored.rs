//! Anchored VWAP: cumulative from a chosen candle onward, never reset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::accumulator::VwapAccumulator;
use super::config::{PriceSource, VwapConfig};
use crate::domain::{Candle, GapPoint};
use crate::session::{calendar_date, date_key};

/// Where accumulation starts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Anchor {
    /// First candle at or after this timestamp.
    Time { time: i64 },
    /// First candle of the given calendar day.
    Session { date: NaiveDate },
    /// First candle of the last calendar day present in the data.
    #[default]
    LatestSession,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchoredVwap {
    pub anchor: Anchor,
    pub source: PriceSource,
    pub ignore_volume: bool,
}

impl AnchoredVwap {
    pub fn new(anchor: Anchor) -> Self {
        Self {
            anchor,
            ..Self::default()
        }
    }

    /// Index of the anchor candle, if the anchor resolves inside the data.
    pub fn anchor_index(&self, candles: &[Candle]) -> Option<usize> {
        match self.anchor {
            Anchor::Time { time } => candles.iter().position(|c| c.time >= time),
            Anchor::Session { date } => candles.iter().position(|c| calendar_date(c.time) == date),
            Anchor::LatestSession => {
                let last = date_key(candles.last()?.time);
                candles.iter().position(|c| date_key(c.time) == last)
            }
        }
    }

    /// One point per candle; `None` before the anchor.
    pub fn compute(&self, candles: &[Candle]) -> Vec<GapPoint> {
        let start = self.anchor_index(candles).unwrap_or(candles.len());
        let config = VwapConfig {
            reset_daily: false,
            source: self.source,
            ignore_volume: self.ignore_volume,
            ..VwapConfig::default()
        };

        let mut acc = VwapAccumulator::default();
        candles
            .iter()
            .enumerate()
            .map(|(i, candle)| GapPoint {
                time: candle.time,
                value: (i >= start).then(|| acc.push(candle, &config).vwap),
            })
            .collect()
    }
}
