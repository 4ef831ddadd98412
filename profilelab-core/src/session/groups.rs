//! Grouping candles into calendar sessions.

use std::collections::HashMap;

use serde::Serialize;

use super::clock::{date_key, is_market_hours};
use crate::domain::Candle;

/// Candles sharing one session key, sorted by time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayGroup {
    pub date_str: String,
    pub candles: Vec<Candle>,
}

impl DayGroup {
    /// Candles inside 09:15..=15:30, in order.
    pub fn market_hours(&self) -> Vec<Candle> {
        self.candles
            .iter()
            .filter(|c| is_market_hours(c.time))
            .copied()
            .collect()
    }
}

/// Insertion-ordered map from session key to its candles.
///
/// Keys appear in the order their first candle was seen; candles inside a
/// group are re-sorted by time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DayGroups {
    groups: Vec<DayGroup>,
}

impl DayGroups {
    /// Group by an arbitrary key function (calendar day, ISO week, ...).
    pub fn by_key<F>(candles: &[Candle], mut key: F) -> Self
    where
        F: FnMut(&Candle) -> String,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<DayGroup> = Vec::new();

        for candle in candles {
            let k = key(candle);
            match index.get(&k) {
                Some(&i) => groups[i].candles.push(*candle),
                None => {
                    index.insert(k.clone(), groups.len());
                    groups.push(DayGroup {
                        date_str: k,
                        candles: vec![*candle],
                    });
                }
            }
        }

        for group in &mut groups {
            group.candles.sort_by_key(|c| c.time);
        }

        Self { groups }
    }

    pub fn get(&self, key: &str) -> Option<&DayGroup> {
        self.groups.iter().find(|g| g.date_str == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.date_str.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'a> IntoIterator for &'a DayGroups {
    type Item = &'a DayGroup;
    type IntoIter = std::slice::Iter<'a, DayGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

pub fn group_by_calendar_day(candles: &[Candle]) -> DayGroups {
    DayGroups::by_key(candles, |c| date_key(c.time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::test_support::{at, DAY_1, DAY_2};

    #[test]
    fn groups_preserve_first_seen_order() {
        let candles = vec![
            Candle::new(at(DAY_1, 9, 15), 1.0, 1.0, 1.0, 1.0),
            Candle::new(at(DAY_1, 9, 20), 1.0, 1.0, 1.0, 1.0),
            Candle::new(at(DAY_2, 9, 15), 1.0, 1.0, 1.0, 1.0),
        ];
        let groups = group_by_calendar_day(&candles);
        let keys: Vec<&str> = groups.keys().collect();
        assert_eq!(keys, vec!["2024-01-02", "2024-01-03"]);
        assert_eq!(groups.get("2024-01-02").unwrap().candles.len(), 2);
    }

    #[test]
    fn candles_are_resorted_within_a_group() {
        let candles = vec![
            Candle::new(at(DAY_1, 10, 0), 2.0, 2.0, 2.0, 2.0),
            Candle::new(at(DAY_1, 9, 15), 1.0, 1.0, 1.0, 1.0),
        ];
        let groups = group_by_calendar_day(&candles);
        let day = groups.get("2024-01-02").unwrap();
        assert_eq!(day.candles[0].open, 1.0);
        assert_eq!(day.candles[1].open, 2.0);
    }

    #[test]
    fn market_hours_filter() {
        let candles = vec![
            Candle::new(at(DAY_1, 9, 0), 1.0, 1.0, 1.0, 1.0),
            Candle::new(at(DAY_1, 9, 15), 1.0, 1.0, 1.0, 1.0),
            Candle::new(at(DAY_1, 15, 45), 1.0, 1.0, 1.0, 1.0),
        ];
        let groups = group_by_calendar_day(&candles);
        assert_eq!(groups.get("2024-01-02").unwrap().market_hours().len(), 1);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_calendar_day(&[]).is_empty());
    }
}
