//! Volume Weighted Average Price.
//!
//! VWAP = cumulative(price * volume) / cumulative(volume), restarted at every
//! session boundary when `reset_daily` is set. A session boundary is
//! midnight, or the exchange open when `reset_at_market_open` is set.

pub mod anchored;
pub mod config;

mod accumulator;

pub use anchored::{Anchor, AnchoredVwap};
pub use config::{Exchange, PriceSource, VwapConfig};

use serde::{Deserialize, Serialize};

use crate::domain::{Candle, SeriesPoint};
use crate::session::date_key;
use accumulator::VwapAccumulator;

/// Session key of a candle under this config; `None` means one unbroken
/// session.
fn session_key(candle: &Candle, config: &VwapConfig) -> Option<String> {
    if !config.reset_daily {
        return None;
    }
    if config.reset_at_market_open {
        let open_secs = i64::from(config.exchange.market_open().minutes()) * 60;
        return Some(date_key(candle.time - open_secs));
    }
    Some(date_key(candle.time))
}

/// Walk candles through the accumulator, resetting at session changes.
fn fold<F>(candles: &[Candle], config: &VwapConfig, mut emit: F)
where
    F: FnMut(&Candle, accumulator::VwapValue),
{
    let mut acc = VwapAccumulator::default();
    let mut current: Option<Option<String>> = None;

    for candle in candles {
        let key = session_key(candle, config);
        if current.as_ref() != Some(&key) {
            acc.reset();
            current = Some(key);
        }
        emit(candle, acc.push(candle, config));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Vwap {
    #[serde(flatten)]
    pub config: VwapConfig,
}

impl Vwap {
    pub fn new(config: VwapConfig) -> Self {
        Self { config }
    }

    pub fn compute(&self, candles: &[Candle]) -> Vec<SeriesPoint> {
        let mut out = Vec::with_capacity(candles.len());
        fold(candles, &self.config, |candle, value| {
            out.push(SeriesPoint::new(candle.time, value.vwap));
        });
        out
    }
}

/// VWAP with volume-weighted standard deviation bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VwapBands {
    #[serde(flatten)]
    pub config: VwapConfig,
    pub multipliers: Vec<f64>,
}

impl Default for VwapBands {
    fn default() -> Self {
        Self {
            config: VwapConfig::default(),
            multipliers: vec![1.0, 2.0, 3.0],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BandPair {
    pub multiplier: f64,
    pub upper: Vec<SeriesPoint>,
    pub lower: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VwapBandsOutput {
    pub vwap: Vec<SeriesPoint>,
    pub bands: Vec<BandPair>,
}

impl VwapBands {
    pub fn compute(&self, candles: &[Candle]) -> VwapBandsOutput {
        let mut out = VwapBandsOutput {
            vwap: Vec::with_capacity(candles.len()),
            bands: self
                .multipliers
                .iter()
                .map(|&multiplier| BandPair {
                    multiplier,
                    ..BandPair::default()
                })
                .collect(),
        };

        fold(candles, &self.config, |candle, value| {
            out.vwap.push(SeriesPoint::new(candle.time, value.vwap));
            for band in &mut out.bands {
                let offset = band.multiplier * value.stddev;
                band.upper
                    .push(SeriesPoint::new(candle.time, value.vwap + offset));
                band.lower
                    .push(SeriesPoint::new(candle.time, value.vwap - offset));
            }
        });

        out
    }
}
