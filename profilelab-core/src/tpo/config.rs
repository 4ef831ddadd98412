//! Market Profile configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::session::TimeOfDay;

/// `"auto"` or an explicit positive tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "TickSizeRepr", into = "TickSizeRepr")]
pub enum TickSize {
    #[default]
    Auto,
    Fixed(f64),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum TickSizeRepr {
    Number(f64),
    Text(String),
}

impl TryFrom<TickSizeRepr> for TickSize {
    type Error = ConfigError;

    fn try_from(repr: TickSizeRepr) -> Result<Self, Self::Error> {
        match repr {
            TickSizeRepr::Number(n) => TickSize::fixed(n, &n.to_string()),
            TickSizeRepr::Text(s) if s.trim().eq_ignore_ascii_case("auto") => Ok(TickSize::Auto),
            TickSizeRepr::Text(s) => {
                let n: f64 = s
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidTickSize(s.clone()))?;
                TickSize::fixed(n, &s)
            }
        }
    }
}

impl From<TickSize> for TickSizeRepr {
    fn from(tick: TickSize) -> Self {
        match tick {
            TickSize::Auto => TickSizeRepr::Text("auto".to_string()),
            TickSize::Fixed(n) => TickSizeRepr::Number(n),
        }
    }
}

impl TickSize {
    fn fixed(n: f64, raw: &str) -> Result<Self, ConfigError> {
        if n.is_finite() && n > 0.0 {
            Ok(TickSize::Fixed(n))
        } else {
            Err(ConfigError::InvalidTickSize(raw.to_string()))
        }
    }
}

/// Length of one TPO period in minutes. Written as `30m`, `1h`, `"15"` or a
/// bare `15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BlockSizeRepr", into = "String")]
pub struct BlockSize(u32);

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum BlockSizeRepr {
    Minutes(u32),
    Text(String),
}

impl BlockSize {
    pub fn from_minutes(minutes: u32) -> Self {
        Self(minutes.max(1))
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidBlockSize(s.to_string());
        let t = s.trim();
        let (digits, scale) = if let Some(d) = t.strip_suffix('m') {
            (d, 1)
        } else if let Some(d) = t.strip_suffix('h') {
            (d, 60)
        } else {
            (t, 1)
        };
        let n: u32 = digits.parse().map_err(|_| invalid())?;
        if n == 0 {
            return Err(invalid());
        }
        n.checked_mul(scale).map(Self).ok_or_else(invalid)
    }
}

impl Default for BlockSize {
    fn default() -> Self {
        Self(30)
    }
}

impl TryFrom<BlockSizeRepr> for BlockSize {
    type Error = ConfigError;

    fn try_from(repr: BlockSizeRepr) -> Result<Self, Self::Error> {
        match repr {
            BlockSizeRepr::Minutes(0) => Err(ConfigError::InvalidBlockSize("0".to_string())),
            BlockSizeRepr::Minutes(n) => Ok(Self(n)),
            BlockSizeRepr::Text(s) => Self::parse(&s),
        }
    }
}

impl From<BlockSize> for String {
    fn from(block: BlockSize) -> Self {
        format!("{}m", block.0)
    }
}

/// A named zone resolved to a fixed UTC offset. No DST, no tz database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timezone {
    name: String,
    offset_minutes: i32,
}

const ZONES: &[(&str, i32)] = &[
    ("exchange", 0),
    ("UTC", 0),
    ("Etc/UTC", 0),
    ("GMT", 0),
    ("Asia/Kolkata", 330),
    ("Asia/Calcutta", 330),
    ("IST", 330),
    ("Asia/Dubai", 240),
    ("Asia/Singapore", 480),
    ("Asia/Hong_Kong", 480),
    ("Asia/Shanghai", 480),
    ("Asia/Tokyo", 540),
];

impl Timezone {
    /// Known zone name, or a literal `+HH:MM` / `-HH:MM` offset.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let name = s.trim();
        if let Some(&(_, offset)) = ZONES.iter().find(|(z, _)| z.eq_ignore_ascii_case(name)) {
            return Ok(Self {
                name: name.to_string(),
                offset_minutes: offset,
            });
        }

        let unknown = || ConfigError::UnknownTimezone(s.to_string());
        let (sign, rest) = match name.chars().next() {
            Some('+') => (1, &name[1..]),
            Some('-') => (-1, &name[1..]),
            _ => return Err(unknown()),
        };
        let time = TimeOfDay::parse(rest).map_err(|_| unknown())?;
        Ok(Self {
            name: name.to_string(),
            offset_minutes: sign * time.minutes() as i32,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn offset_minutes(&self) -> i32 {
        self.offset_minutes
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self {
            name: "Asia/Kolkata".to_string(),
            offset_minutes: 330,
        }
    }
}

impl TryFrom<String> for Timezone {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Timezone> for String {
    fn from(tz: Timezone) -> Self {
        tz.name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionGrouping {
    #[default]
    Day,
    Week,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TpoConfig {
    pub tick_size: TickSize,
    pub block_size: BlockSize,
    pub session_start: TimeOfDay,
    pub session_end: TimeOfDay,
    pub value_area_percent: f64,
    pub poor_threshold: usize,
    pub timezone: Timezone,
    /// Apply the timezone offset. Off by default: candle times already carry
    /// the exchange offset.
    pub timestamps_are_utc: bool,
    /// Bar interval such as `5m`, `1D`, `W`, `M`. Inferred from the first
    /// gap when absent.
    pub interval: Option<String>,
    pub grouping: SessionGrouping,
    pub initial_balance_periods: usize,
}

impl Default for TpoConfig {
    fn default() -> Self {
        Self {
            tick_size: TickSize::Auto,
            block_size: BlockSize::default(),
            session_start: TimeOfDay::from_hm(9, 15),
            session_end: TimeOfDay::from_hm(15, 30),
            value_area_percent: 70.0,
            poor_threshold: 2,
            timezone: Timezone::default(),
            timestamps_are_utc: false,
            interval: None,
            grouping: SessionGrouping::Day,
            initial_balance_periods: 2,
        }
    }
}

impl TpoConfig {
    /// Offset actually applied to candle times.
    pub fn effective_offset_minutes(&self) -> i32 {
        if self.timestamps_are_utc {
            self.timezone.offset_minutes()
        } else {
            0
        }
    }

    /// Explicit interval names a daily or longer bar (`D`, `W`, `M` suffix).
    ///
    /// `None` when no interval is configured.
    pub fn explicit_higher_timeframe(&self) -> Option<bool> {
        let interval = self.interval.as_deref()?.trim();
        Some(matches!(
            interval.chars().last(),
            Some('D') | Some('d') | Some('W') | Some('w') | Some('M')
        ))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session_end <= self.session_start {
            return Err(ConfigError::EmptySessionWindow {
                start: self.session_start.to_string(),
                end: self.session_end.to_string(),
            });
        }
        Ok(())
    }
}
