//! Chart markers and the signal events they annotate.

use serde::{Deserialize, Serialize};

pub const BULLISH_COLOR: &str = "#26a69a";
pub const BEARISH_COLOR: &str = "#ef5350";
pub const NEUTRAL_COLOR: &str = "#2962ff";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerPosition {
    AboveBar,
    BelowBar,
    InBar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerShape {
    ArrowUp,
    ArrowDown,
    Circle,
    Square,
}

/// A single annotation pinned to a candle time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub time: i64,
    pub position: MarkerPosition,
    pub shape: MarkerShape,
    pub color: String,
    pub text: String,
}

impl Marker {
    /// Upward arrow below the bar.
    pub fn bullish(time: i64, text: impl Into<String>) -> Self {
        Self {
            time,
            position: MarkerPosition::BelowBar,
            shape: MarkerShape::ArrowUp,
            color: BULLISH_COLOR.to_string(),
            text: text.into(),
        }
    }

    /// Downward arrow above the bar.
    pub fn bearish(time: i64, text: impl Into<String>) -> Self {
        Self {
            time,
            position: MarkerPosition::AboveBar,
            shape: MarkerShape::ArrowDown,
            color: BEARISH_COLOR.to_string(),
            text: text.into(),
        }
    }

    /// Neutral square on the bar, marking where a range was set.
    pub fn range(time: i64, text: impl Into<String>) -> Self {
        Self {
            time,
            position: MarkerPosition::InBar,
            shape: MarkerShape::Square,
            color: NEUTRAL_COLOR.to_string(),
            text: text.into(),
        }
    }

    /// Neutral circle above the bar.
    pub fn note(time: i64, text: impl Into<String>) -> Self {
        Self {
            time,
            position: MarkerPosition::AboveBar,
            shape: MarkerShape::Circle,
            color: NEUTRAL_COLOR.to_string(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    Breakout,
    Breakdown,
}

/// A close beyond a level, recorded at the candle that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalEvent {
    pub kind: SignalKind,
    pub time: i64,
    pub price: f64,
}

impl SignalEvent {
    pub fn marker(&self) -> Marker {
        match self.kind {
            SignalKind::Breakout => Marker::bullish(self.time, "Breakout"),
            SignalKind::Breakdown => Marker::bearish(self.time, "Breakdown"),
        }
    }
}
