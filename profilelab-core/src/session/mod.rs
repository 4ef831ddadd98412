//! Time and session classification.

pub mod clock;
pub mod groups;

pub use clock::{
    calendar_date, date_key, is_in_window, is_market_hours, minutes_since_midnight, month_key,
    to_calendar_components, week_key, CalendarComponents, TimeOfDay, MARKET_CLOSE_MINUTES,
    MARKET_OPEN_MINUTES, SECONDS_PER_DAY,
};
pub use groups::{group_by_calendar_day, DayGroup, DayGroups};

#[cfg(test)]
pub(crate) mod test_support {
    /// 2024-01-02 00:00 exchange-local.
    pub const DAY_1: i64 = 1_704_153_600;
    /// 2024-01-03 00:00 exchange-local.
    pub const DAY_2: i64 = DAY_1 + 86_400;

    pub fn at(day: i64, hour: i64, minute: i64) -> i64 {
        day + hour * 3600 + minute * 60
    }
}
