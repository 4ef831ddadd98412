//! TPO histogram and per-session profile.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::analytics::{
    point_of_control, poor_extremes, rotation_factor, single_prints, value_area, PeriodRange,
};
use super::config::{TickSize, TpoConfig};
use super::letters::period_letter;
use super::segment::{segment, SessionSlice};
use super::tick::{auto_tick_size, level_price, tick_index};
use crate::domain::Candle;

/// One price level of a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TpoLevel {
    pub price: f64,
    /// Number of distinct periods that traded at this price.
    pub tpo_count: usize,
    /// Period letters in period order, e.g. `"ABD"`.
    pub letters: String,
    pub is_initial_balance: bool,
}

/// One time bucket of a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TpoPeriod {
    pub index: usize,
    pub letter: String,
    pub start_time: i64,
    pub end_time: i64,
    pub high: f64,
    pub low: f64,
}

/// Market Profile of one session (day, week, or composite).
///
/// `levels` is sorted by descending price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TpoProfile {
    pub session_id: String,
    pub start_time: i64,
    pub end_time: i64,
    pub tick_size: f64,
    pub levels: Vec<TpoLevel>,
    pub total_tpos: usize,
    pub poc: f64,
    pub value_area_high: f64,
    pub value_area_low: f64,
    pub initial_balance_high: f64,
    pub initial_balance_low: f64,
    pub high: f64,
    pub low: f64,
    pub rotation_factor: i32,
    pub poor_high: bool,
    pub poor_low: bool,
    pub single_prints: Vec<f64>,
    pub periods: Vec<TpoPeriod>,
}

impl TpoProfile {
    pub fn level(&self, price: f64) -> Option<&TpoLevel> {
        let half_tick = self.tick_size / 2.0;
        self.levels.iter().find(|l| (l.price - price).abs() < half_tick)
    }
}

/// Tick index → set of period indices that touched it.
///
/// Adding a period to a level is idempotent; the TPO count is the size of
/// the set, not the number of touches.
#[derive(Debug, Clone, Default)]
pub struct TpoHistogram {
    tick: f64,
    levels: BTreeMap<i64, BTreeSet<usize>>,
}

impl TpoHistogram {
    pub fn new(tick: f64) -> Self {
        Self {
            tick,
            levels: BTreeMap::new(),
        }
    }

    /// Mark every level between the candle's quantized low and high.
    /// Returns how many TPOs were added.
    pub fn add(&mut self, period: usize, candle: &Candle) -> usize {
        let lo = tick_index(candle.low.min(candle.high), self.tick);
        let hi = tick_index(candle.high.max(candle.low), self.tick);
        (lo..=hi)
            .filter(|&idx| self.levels.entry(idx).or_default().insert(period))
            .count()
    }

    pub fn counts(&self) -> BTreeMap<i64, usize> {
        self.levels.iter().map(|(&idx, set)| (idx, set.len())).collect()
    }

    pub fn total(&self) -> usize {
        self.levels.values().map(BTreeSet::len).sum()
    }

    pub fn periods_at(&self, idx: i64) -> Option<&BTreeSet<usize>> {
        self.levels.get(&idx)
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Resolve the tick for a batch: the explicit value, or the auto policy
/// over the mean close and the mean session range.
pub fn resolve_tick_size(slices: &[SessionSlice], tick_size: TickSize) -> Option<f64> {
    if let TickSize::Fixed(tick) = tick_size {
        return Some(tick);
    }

    let closes: Vec<f64> = slices
        .iter()
        .flat_map(|s| s.entries.iter().map(|(_, c)| c.close))
        .collect();
    if closes.is_empty() {
        return None;
    }
    let reference = closes.iter().sum::<f64>() / closes.len() as f64;

    let ranges: Vec<f64> = slices
        .iter()
        .map(|s| {
            let high = s.entries.iter().map(|(_, c)| c.high).fold(f64::NEG_INFINITY, f64::max);
            let low = s.entries.iter().map(|(_, c)| c.low).fold(f64::INFINITY, f64::min);
            high - low
        })
        .collect();
    let typical_range = ranges.iter().sum::<f64>() / ranges.len() as f64;

    let tick = auto_tick_size(reference, typical_range);
    debug!(reference, typical_range, tick, "auto tick size");
    Some(tick)
}

/// Upper bound on price levels spanned by one batch. A tick this fine
/// relative to the price range is a misconfiguration.
pub const MAX_PROFILE_LEVELS: i64 = 50_000;

fn level_span(slices: &[SessionSlice], tick: f64) -> i64 {
    let candles = || slices.iter().flat_map(|s| s.entries.iter().map(|(_, c)| c));
    let high = candles().map(|c| c.high).fold(f64::NEG_INFINITY, f64::max);
    let low = candles().map(|c| c.low).fold(f64::INFINITY, f64::min);
    if !(high.is_finite() && low.is_finite()) {
        return 0;
    }
    tick_index(high, tick) - tick_index(low, tick) + 1
}

/// Build one profile per session. Empty or unusable input gives an empty
/// list, as does a tick that would span more than [`MAX_PROFILE_LEVELS`].
pub fn build_profiles(candles: &[Candle], config: &TpoConfig) -> Vec<TpoProfile> {
    if let Err(err) = config.validate() {
        debug!(%err, "invalid market profile config");
        return Vec::new();
    }

    let usable: Vec<Candle> = candles.iter().filter(|c| c.is_sane()).copied().collect();
    let slices = segment(&usable, config);
    let Some(tick) = resolve_tick_size(&slices, config.tick_size) else {
        return Vec::new();
    };
    let span = level_span(&slices, tick);
    if span > MAX_PROFILE_LEVELS {
        warn!(tick, levels = span, max = MAX_PROFILE_LEVELS, "tick size too fine for price range");
        return Vec::new();
    }

    slices
        .iter()
        .filter_map(|slice| build_session(slice, tick, config))
        .collect()
}

fn build_session(slice: &SessionSlice, tick: f64, config: &TpoConfig) -> Option<TpoProfile> {
    let mut histogram = TpoHistogram::new(tick);
    let mut periods: BTreeMap<usize, TpoPeriod> = BTreeMap::new();

    for (period, candle) in &slice.entries {
        histogram.add(*period, candle);
        periods
            .entry(*period)
            .and_modify(|p| {
                p.high = p.high.max(candle.high);
                p.low = p.low.min(candle.low);
                p.start_time = p.start_time.min(candle.time);
                p.end_time = p.end_time.max(candle.time);
            })
            .or_insert_with(|| TpoPeriod {
                index: *period,
                letter: period_letter(*period),
                start_time: candle.time,
                end_time: candle.time,
                high: candle.high,
                low: candle.low,
            });
    }

    if histogram.is_empty() {
        return None;
    }

    let periods: Vec<TpoPeriod> = periods.into_values().collect();
    let counts = histogram.counts();
    let poc = point_of_control(&counts)?;
    let va = value_area(&counts, poc, config.value_area_percent);

    let ib: Vec<&TpoPeriod> = periods.iter().take(config.initial_balance_periods).collect();
    let ib_indices: BTreeSet<usize> = ib.iter().map(|p| p.index).collect();
    let ib_high = ib.iter().map(|p| p.high).fold(f64::NEG_INFINITY, f64::max);
    let ib_low = ib.iter().map(|p| p.low).fold(f64::INFINITY, f64::min);

    let ranges: Vec<PeriodRange> = periods
        .iter()
        .map(|p| PeriodRange {
            high: p.high,
            low: p.low,
        })
        .collect();
    let (poor_high, poor_low) = poor_extremes(&counts, config.poor_threshold);

    let levels: Vec<TpoLevel> = counts
        .iter()
        .rev()
        .map(|(&idx, &tpo_count)| {
            let set = histogram.periods_at(idx);
            let letters = set
                .map(|s| s.iter().map(|&p| period_letter(p)).collect::<String>())
                .unwrap_or_default();
            let is_initial_balance = set.map_or(false, |s| !s.is_disjoint(&ib_indices));
            TpoLevel {
                price: level_price(idx, tick),
                tpo_count,
                letters,
                is_initial_balance,
            }
        })
        .collect();

    let high = periods.iter().map(|p| p.high).fold(f64::NEG_INFINITY, f64::max);
    let low = periods.iter().map(|p| p.low).fold(f64::INFINITY, f64::min);

    Some(TpoProfile {
        session_id: slice.id.clone(),
        start_time: periods.iter().map(|p| p.start_time).min().unwrap_or_default(),
        end_time: periods.iter().map(|p| p.end_time).max().unwrap_or_default(),
        tick_size: tick,
        total_tpos: histogram.total(),
        poc: level_price(poc, tick),
        value_area_high: level_price(va.high, tick),
        value_area_low: level_price(va.low, tick),
        initial_balance_high: ib_high,
        initial_balance_low: ib_low,
        high,
        low,
        rotation_factor: rotation_factor(&ranges),
        poor_high,
        poor_low,
        single_prints: single_prints(&counts)
            .into_iter()
            .map(|idx| level_price(idx, tick))
            .collect(),
        levels,
        periods,
    })
}
