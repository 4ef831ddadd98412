//! Profile statistics over a tick-indexed TPO histogram.
//!
//! `counts` maps tick index → TPO count. Missing indices count as zero.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Highest count; ties go to the lowest price.
pub fn point_of_control(counts: &BTreeMap<i64, usize>) -> Option<i64> {
    let mut best: Option<(i64, usize)> = None;
    for (&idx, &count) in counts {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((idx, count));
        }
    }
    best.map(|(idx, _)| idx)
}

/// Tick-index bounds of the value area, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueArea {
    pub low: i64,
    pub high: i64,
    pub tpos: usize,
}

/// Expand one tick at a time from the POC towards the busier neighbor
/// (ties go up) until `percent` of all TPOs is covered or both neighbors
/// are empty.
pub fn value_area(counts: &BTreeMap<i64, usize>, poc: i64, percent: f64) -> ValueArea {
    let count = |idx: i64| counts.get(&idx).copied().unwrap_or(0);
    let total: usize = counts.values().sum();
    let target = total as f64 * percent / 100.0;

    let mut area = ValueArea {
        low: poc,
        high: poc,
        tpos: count(poc),
    };

    while (area.tpos as f64) < target {
        let above = count(area.high + 1);
        let below = count(area.low - 1);
        if above == 0 && below == 0 {
            break;
        }
        if above >= below {
            area.high += 1;
            area.tpos += above;
        } else {
            area.low -= 1;
            area.tpos += below;
        }
    }

    area
}

/// High and low of one TPO period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodRange {
    pub high: f64,
    pub low: f64,
}

/// +1 per period making a higher high, -1 per period making a lower low,
/// each against the period before it.
pub fn rotation_factor(periods: &[PeriodRange]) -> i32 {
    periods
        .windows(2)
        .map(|w| {
            let (prev, cur) = (w[0], w[1]);
            let mut score = 0;
            if cur.high > prev.high {
                score += 1;
            }
            if cur.low < prev.low {
                score -= 1;
            }
            score
        })
        .sum()
}

/// (poor high, poor low): an extreme level holding at most `threshold` TPOs.
pub fn poor_extremes(counts: &BTreeMap<i64, usize>, threshold: usize) -> (bool, bool) {
    let high = counts.iter().next_back().map_or(false, |(_, &c)| c <= threshold);
    let low = counts.iter().next().map_or(false, |(_, &c)| c <= threshold);
    (high, low)
}

/// Interior levels with exactly one TPO whose immediate neighbors both
/// hold more than one.
pub fn single_prints(counts: &BTreeMap<i64, usize>) -> Vec<i64> {
    let (Some((&lowest, _)), Some((&highest, _))) = (counts.iter().next(), counts.iter().next_back())
    else {
        return Vec::new();
    };
    let count = |idx: i64| counts.get(&idx).copied().unwrap_or(0);

    counts
        .iter()
        .filter(|&(&idx, &c)| {
            c == 1 && idx != lowest && idx != highest && count(idx - 1) > 1 && count(idx + 1) > 1
        })
        .map(|(&idx, _)| idx)
        .collect()
}
