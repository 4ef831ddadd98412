//! Timestamp classification.
//!
//! Timestamps are epoch seconds already shifted to exchange-local time, so
//! calendar fields are read as if the value were UTC. Nothing here consults
//! the wall clock or a timezone database.

use chrono::{DateTime, Datelike, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const SECONDS_PER_DAY: i64 = 86_400;

/// 09:15 in minutes since midnight.
pub const MARKET_OPEN_MINUTES: u32 = 9 * 60 + 15;

/// 15:30 in minutes since midnight.
pub const MARKET_CLOSE_MINUTES: u32 = 15 * 60 + 30;

/// Calendar fields of a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarComponents {
    pub hours: u32,
    pub minutes: u32,
    /// `YYYY-MM-DD`
    pub date_str: String,
}

impl CalendarComponents {
    pub fn minutes_since_midnight(&self) -> u32 {
        self.hours * 60 + self.minutes
    }
}

fn naive_datetime(timestamp: i64) -> chrono::NaiveDateTime {
    DateTime::from_timestamp(timestamp, 0)
        .unwrap_or_default()
        .naive_utc()
}

pub fn to_calendar_components(timestamp: i64) -> CalendarComponents {
    let dt = naive_datetime(timestamp);
    CalendarComponents {
        hours: dt.hour(),
        minutes: dt.minute(),
        date_str: dt.date().format("%Y-%m-%d").to_string(),
    }
}

pub fn calendar_date(timestamp: i64) -> NaiveDate {
    naive_datetime(timestamp).date()
}

pub fn date_key(timestamp: i64) -> String {
    calendar_date(timestamp).format("%Y-%m-%d").to_string()
}

/// ISO week key, e.g. `2024-W05`.
pub fn week_key(timestamp: i64) -> String {
    let week = calendar_date(timestamp).iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

/// Calendar month key, e.g. `2024-02`.
pub fn month_key(timestamp: i64) -> String {
    calendar_date(timestamp).format("%Y-%m").to_string()
}

pub fn minutes_since_midnight(timestamp: i64) -> u32 {
    (timestamp.rem_euclid(SECONDS_PER_DAY) / 60) as u32
}

/// True iff the time of day lies in 09:15..=15:30.
pub fn is_market_hours(timestamp: i64) -> bool {
    let minutes = minutes_since_midnight(timestamp);
    (MARKET_OPEN_MINUTES..=MARKET_CLOSE_MINUTES).contains(&minutes)
}

/// True iff the time of day lies in `[start, end)`.
pub fn is_in_window(
    timestamp: i64,
    start_hour: u32,
    start_minute: u32,
    end_hour: u32,
    end_minute: u32,
) -> bool {
    let minutes = minutes_since_midnight(timestamp);
    let start = start_hour * 60 + start_minute;
    let end = end_hour * 60 + end_minute;
    minutes >= start && minutes < end
}

/// A time of day stored as minutes since midnight.
///
/// (De)serializes as an `HH:MM` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub const fn from_hm(hours: u32, minutes: u32) -> Self {
        Self(hours * 60 + minutes)
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    pub fn hours_minutes(self) -> (u32, u32) {
        (self.0 / 60, self.0 % 60)
    }

    /// Parse `HH:MM` (24h). `9:15` is accepted.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidTimeOfDay(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hours: u32 = h.parse().map_err(|_| invalid())?;
        let minutes: u32 = m.parse().map_err(|_| invalid())?;
        if hours > 23 || minutes > 59 || m.len() != 2 {
            return Err(invalid());
        }
        Ok(Self::from_hm(hours, minutes))
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (h, m) = self.hours_minutes();
        write!(f, "{h:02}:{m:02}")
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-01-02 00:00:00 "UTC" (exchange-local)
    const DAY: i64 = 1_704_153_600;

    #[test]
    fn calendar_components_read_utc_fields() {
        let c = to_calendar_components(DAY + 9 * 3600 + 15 * 60);
        assert_eq!(c.hours, 9);
        assert_eq!(c.minutes, 15);
        assert_eq!(c.date_str, "2024-01-02");
        assert_eq!(c.minutes_since_midnight(), 555);
    }

    #[test]
    fn market_hours_is_inclusive_on_both_ends() {
        assert!(!is_market_hours(DAY + 9 * 3600 + 14 * 60));
        assert!(is_market_hours(DAY + 9 * 3600 + 15 * 60));
        assert!(is_market_hours(DAY + 15 * 3600 + 30 * 60));
        assert!(!is_market_hours(DAY + 15 * 3600 + 31 * 60));
    }

    #[test]
    fn window_excludes_end() {
        assert!(is_in_window(DAY + 9 * 3600 + 30 * 60, 9, 30, 10, 0));
        assert!(is_in_window(DAY + 9 * 3600 + 59 * 60, 9, 30, 10, 0));
        assert!(!is_in_window(DAY + 10 * 3600, 9, 30, 10, 0));
    }

    #[test]
    fn week_and_month_keys() {
        assert_eq!(week_key(DAY), "2024-W01");
        assert_eq!(month_key(DAY), "2024-01");
    }

    #[test]
    fn time_of_day_parse() {
        assert_eq!(TimeOfDay::parse("09:15").unwrap().minutes(), 555);
        assert_eq!(TimeOfDay::parse("9:15").unwrap().minutes(), 555);
        assert!(TimeOfDay::parse("24:00").is_err());
        assert!(TimeOfDay::parse("09:5").is_err());
        assert!(TimeOfDay::parse("0915").is_err());
        assert_eq!(TimeOfDay::from_hm(15, 30).to_string(), "15:30");
    }
}
