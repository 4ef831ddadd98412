//! Market Profile (TPO) engine.
//!
//! Candles are split into sessions (calendar day, ISO week, or a single
//! composite session for daily-and-longer bars). Each candle belongs to a
//! time period identified by a letter; every tick-quantized price inside the
//! candle's range records that letter once. From the resulting histogram:
//!
//! - POC: level with the most TPOs (lowest price on ties)
//! - Value area: grown tick by tick from the POC to `value_area_percent`
//! - Initial balance: range of the first `initial_balance_periods` periods
//! - Rotation factor, poor high/low, single prints

pub mod analytics;
pub mod config;
pub mod letters;
pub mod profile;
pub mod segment;
pub mod tick;

pub use config::{BlockSize, SessionGrouping, TickSize, Timezone, TpoConfig};
pub use letters::period_letter;
pub use profile::{
    build_profiles, TpoHistogram, TpoLevel, TpoPeriod, TpoProfile, MAX_PROFILE_LEVELS,
};
pub use segment::{is_higher_timeframe, COMPOSITE_SESSION};
pub use tick::auto_tick_size;
