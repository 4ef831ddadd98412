//! Splitting candles into profile sessions and TPO periods.

use tracing::{debug, trace};

use super::config::{SessionGrouping, TpoConfig};
use crate::domain::Candle;
use crate::session::{
    date_key, minutes_since_midnight, week_key, DayGroups, SECONDS_PER_DAY,
};

pub const COMPOSITE_SESSION: &str = "composite";

/// Candles of one profile, each tagged with its period index.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSlice {
    pub id: String,
    pub entries: Vec<(usize, Candle)>,
}

/// Daily or longer bars: explicit interval wins, otherwise the smallest
/// positive gap between consecutive bars. Overnight and weekend gaps in
/// intraday data never decide.
pub fn is_higher_timeframe(candles: &[Candle], config: &TpoConfig) -> bool {
    if let Some(explicit) = config.explicit_higher_timeframe() {
        return explicit;
    }
    candles
        .windows(2)
        .map(|w| w[1].time - w[0].time)
        .filter(|&gap| gap > 0)
        .min()
        .map_or(false, |gap| gap >= SECONDS_PER_DAY)
}

pub fn segment(candles: &[Candle], config: &TpoConfig) -> Vec<SessionSlice> {
    if candles.is_empty() {
        return Vec::new();
    }

    if is_higher_timeframe(candles, config) {
        debug!(candles = candles.len(), "higher timeframe input, building composite profile");
        return vec![SessionSlice {
            id: COMPOSITE_SESSION.to_string(),
            entries: candles.iter().copied().enumerate().collect(),
        }];
    }

    let offset_secs = i64::from(config.effective_offset_minutes()) * 60;
    let local = |c: &Candle| c.time + offset_secs;
    let groups = match config.grouping {
        SessionGrouping::Day => DayGroups::by_key(candles, |c| date_key(local(c))),
        SessionGrouping::Week => DayGroups::by_key(candles, |c| week_key(local(c))),
    };

    let start = config.session_start.minutes();
    let end = config.session_end.minutes();
    let block = config.block_size.minutes();
    let periods_per_day = (end.saturating_sub(start) + block - 1) / block;

    let mut slices = Vec::with_capacity(groups.len());
    for group in &groups {
        let mut entries = Vec::with_capacity(group.candles.len());
        let mut day_ordinal = 0usize;
        let mut current_day: Option<String> = None;

        for candle in &group.candles {
            let minutes = minutes_since_midnight(local(candle));
            if minutes < start || minutes >= end {
                trace!(time = candle.time, "candle outside session window");
                continue;
            }

            let day = date_key(local(candle));
            match &current_day {
                Some(d) if *d == day => {}
                Some(_) => {
                    day_ordinal += 1;
                    current_day = Some(day);
                }
                None => current_day = Some(day),
            }

            let block_index = ((minutes - start) / block) as usize;
            let period = day_ordinal * periods_per_day as usize + block_index;
            entries.push((period, *candle));
        }

        if entries.is_empty() {
            debug!(session = %group.date_str, "no candles inside the session window");
            continue;
        }
        slices.push(SessionSlice {
            id: group.date_str.clone(),
            entries,
        });
    }

    slices
}
