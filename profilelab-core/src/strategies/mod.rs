//! Day-segmented strategy indicators.
//!
//! Each one groups candles by calendar day, keeps market-hours candles,
//! finds the day's defining event, then scans the rest of the day. Days with
//! fewer than two distinct timestamps would plot zero-length lines and are
//! skipped.

pub mod first_red_candle;
pub mod price_action_range;
pub mod range_breakout;

pub use first_red_candle::{FirstRedCandle, FirstRedCandleDay, FirstRedCandleOutput};
pub use price_action_range::{ParDay, ParState, PriceActionRange, PriceActionRangeOutput};
pub use range_breakout::{RangeBreakout, RangeBreakoutDay, RangeBreakoutOutput};

use tracing::trace;

use crate::domain::{Candle, SignalEvent, SignalKind};
use crate::session::group_by_calendar_day;

/// Market-hours candles of one calendar day.
#[derive(Debug, Clone)]
pub(crate) struct TradingDay {
    pub date_str: String,
    pub candles: Vec<Candle>,
}

impl TradingDay {
    pub fn last_time(&self) -> i64 {
        self.candles.last().map_or(0, |c| c.time)
    }
}

/// Days with at least two distinct market-hours timestamps.
pub(crate) fn trading_days(candles: &[Candle]) -> Vec<TradingDay> {
    group_by_calendar_day(candles)
        .iter()
        .filter_map(|group| {
            let candles = group.market_hours();
            let distinct = candles.windows(2).filter(|w| w[0].time != w[1].time).count() + 1;
            if candles.is_empty() || distinct < 2 {
                trace!(day = %group.date_str, "skipping degenerate day");
                return None;
            }
            Some(TradingDay {
                date_str: group.date_str.clone(),
                candles,
            })
        })
        .collect()
}

/// First close above `resistance` and first close below `support`.
pub(crate) fn first_breaks(
    candles: &[Candle],
    resistance: f64,
    support: f64,
) -> (Option<SignalEvent>, Option<SignalEvent>) {
    let breakout = candles.iter().find(|c| c.close > resistance).map(|c| SignalEvent {
        kind: SignalKind::Breakout,
        time: c.time,
        price: c.close,
    });
    let breakdown = candles.iter().find(|c| c.close < support).map(|c| SignalEvent {
        kind: SignalKind::Breakdown,
        time: c.time,
        price: c.close,
    });
    (breakout, breakdown)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::Candle;
    use crate::session::test_support::at;

    /// Five-minute candles from 09:15 on `day`, one per (open, high, low, close).
    pub fn session(day: i64, rows: &[(f64, f64, f64, f64)]) -> Vec<Candle> {
        rows.iter()
            .enumerate()
            .map(|(i, &(o, h, l, c))| Candle::new(at(day, 9, 15) + i as i64 * 300, o, h, l, c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::test_support::{at, DAY_1, DAY_2};

    #[test]
    fn single_candle_days_are_skipped() {
        let candles = vec![
            Candle::new(at(DAY_1, 9, 15), 1.0, 2.0, 0.5, 1.5),
            Candle::new(at(DAY_2, 9, 15), 1.0, 2.0, 0.5, 1.5),
            Candle::new(at(DAY_2, 9, 20), 1.0, 2.0, 0.5, 1.5),
        ];
        let days = trading_days(&candles);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date_str, "2024-01-03");
    }

    #[test]
    fn off_hours_candles_do_not_count() {
        let candles = vec![
            Candle::new(at(DAY_1, 8, 0), 1.0, 2.0, 0.5, 1.5),
            Candle::new(at(DAY_1, 9, 15), 1.0, 2.0, 0.5, 1.5),
        ];
        assert!(trading_days(&candles).is_empty());
    }

    #[test]
    fn first_breaks_only_first_occurrence() {
        let candles = vec![
            Candle::new(1, 0.0, 0.0, 0.0, 11.0),
            Candle::new(2, 0.0, 0.0, 0.0, 12.0),
            Candle::new(3, 0.0, 0.0, 0.0, 4.0),
        ];
        let (up, down) = first_breaks(&candles, 10.0, 5.0);
        assert_eq!(up.unwrap().time, 1);
        assert_eq!(down.unwrap().time, 3);
    }
}
