//! Pivot points.
//!
//! Levels are computed from the previous session's OHLC and applied to every
//! candle of the current session. The first session in the data has no
//! predecessor and produces nothing.
//!
//! Formula set (one set, applied consistently):
//!
//! | formula     | pivot            | R1 / S1          | R2 / S2            | R3 / S3                   |
//! |-------------|------------------|------------------|--------------------|---------------------------|
//! | classic     | (H+L+C)/3        | 2P-L / 2P-H      | P+range / P-range  | H+2(P-L) / L-2(H-P)       |
//! | traditional | (H+L+C)/3        | 2P-L / 2P-H      | P+range / P-range  | P+2*range / P-2*range     |
//! | fibonacci   | (H+L+C)/3        | P±0.382*range    | P±0.618*range      | P±1.000*range             |
//! | woodie      | (H+L+2*O_cur)/4  | 2P-L / 2P-H      | P+range / P-range  | H+2(P-L) / L-2(H-P)       |
//! | camarilla   | (H+L+C)/3        | C±range*1.1/12   | C±range*1.1/6      | C±range*1.1/4             |
//! | dm          | X/4              | X/2-L / X/2-H    | -                  | -                         |
//!
//! DeMark's X is H+2L+C when C<O, 2H+L+C when C>O, else H+L+2C.

use serde::{Deserialize, Serialize};

use crate::domain::Candle;
use crate::session::{date_key, month_key, week_key, DayGroups};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotFormula {
    #[default]
    Classic,
    Traditional,
    Fibonacci,
    Woodie,
    Camarilla,
    #[serde(alias = "demark")]
    Dm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotTimeframe {
    #[default]
    Day,
    Week,
    Month,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PivotPoints {
    pub formula: PivotFormula,
    pub timeframe: PivotTimeframe,
}

/// OHLC summary of one session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionOhlc {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl SessionOhlc {
    /// `None` for an empty slice.
    pub fn from_candles(candles: &[Candle]) -> Option<Self> {
        let first = candles.first()?;
        let last = candles.last()?;
        Some(Self {
            open: first.open,
            high: candles.iter().map(|c| c.high).fold(f64::NEG_INFINITY, f64::max),
            low: candles.iter().map(|c| c.low).fold(f64::INFINITY, f64::min),
            close: last.close,
        })
    }

    pub fn range(&self) -> f64 {
        self.high - self.low
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PivotLevels {
    pub pivot: f64,
    pub r1: f64,
    pub s1: f64,
    pub r2: Option<f64>,
    pub s2: Option<f64>,
    pub r3: Option<f64>,
    pub s3: Option<f64>,
}

/// Levels for one session, spanning its first to last candle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotSession {
    pub session: String,
    pub start_time: i64,
    pub end_time: i64,
    pub levels: PivotLevels,
}

/// Levels stamped on one candle of the current session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PivotBar {
    pub time: i64,
    #[serde(flatten)]
    pub levels: PivotLevels,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PivotOutput {
    pub sessions: Vec<PivotSession>,
    pub bars: Vec<PivotBar>,
}

impl PivotFormula {
    /// Levels from the previous session; `current_open` is only read by Woodie.
    pub fn levels(self, prev: &SessionOhlc, current_open: f64) -> PivotLevels {
        let SessionOhlc {
            open,
            high: h,
            low: l,
            close: c,
        } = *prev;
        let range = prev.range();
        let typical = (h + l + c) / 3.0;

        let standard = |p: f64, r3: f64, s3: f64| PivotLevels {
            pivot: p,
            r1: 2.0 * p - l,
            s1: 2.0 * p - h,
            r2: Some(p + range),
            s2: Some(p - range),
            r3: Some(r3),
            s3: Some(s3),
        };

        match self {
            PivotFormula::Classic => {
                let p = typical;
                standard(p, h + 2.0 * (p - l), l - 2.0 * (h - p))
            }
            PivotFormula::Traditional => {
                let p = typical;
                standard(p, p + 2.0 * range, p - 2.0 * range)
            }
            PivotFormula::Woodie => {
                let p = (h + l + 2.0 * current_open) / 4.0;
                standard(p, h + 2.0 * (p - l), l - 2.0 * (h - p))
            }
            PivotFormula::Fibonacci => {
                let p = typical;
                PivotLevels {
                    pivot: p,
                    r1: p + 0.382 * range,
                    s1: p - 0.382 * range,
                    r2: Some(p + 0.618 * range),
                    s2: Some(p - 0.618 * range),
                    r3: Some(p + range),
                    s3: Some(p - range),
                }
            }
            PivotFormula::Camarilla => {
                let step = range * 1.1;
                PivotLevels {
                    pivot: typical,
                    r1: c + step / 12.0,
                    s1: c - step / 12.0,
                    r2: Some(c + step / 6.0),
                    s2: Some(c - step / 6.0),
                    r3: Some(c + step / 4.0),
                    s3: Some(c - step / 4.0),
                }
            }
            PivotFormula::Dm => {
                let x = if c < open {
                    h + 2.0 * l + c
                } else if c > open {
                    2.0 * h + l + c
                } else {
                    h + l + 2.0 * c
                };
                PivotLevels {
                    pivot: x / 4.0,
                    r1: x / 2.0 - l,
                    s1: x / 2.0 - h,
                    r2: None,
                    s2: None,
                    r3: None,
                    s3: None,
                }
            }
        }
    }
}

impl PivotPoints {
    pub fn new(formula: PivotFormula, timeframe: PivotTimeframe) -> Self {
        Self { formula, timeframe }
    }

    pub fn compute(&self, candles: &[Candle]) -> PivotOutput {
        let key: fn(i64) -> String = match self.timeframe {
            PivotTimeframe::Day => date_key,
            PivotTimeframe::Week => week_key,
            PivotTimeframe::Month => month_key,
        };
        let groups = DayGroups::by_key(candles, |c| key(c.time));

        let mut out = PivotOutput::default();
        let mut prev: Option<SessionOhlc> = None;

        for group in &groups {
            let current = match SessionOhlc::from_candles(&group.candles) {
                Some(ohlc) => ohlc,
                None => continue,
            };
            if let Some(prev) = prev {
                let levels = self.formula.levels(&prev, current.open);
                out.sessions.push(PivotSession {
                    session: group.date_str.clone(),
                    start_time: group.candles[0].time,
                    end_time: group.candles[group.candles.len() - 1].time,
                    levels,
                });
                out.bars.extend(
                    group
                        .candles
                        .iter()
                        .map(|c| PivotBar { time: c.time, levels }),
                );
            }
            prev = Some(current);
        }

        out
    }
}
