//! Plot-ready output points.

use serde::{Deserialize, Serialize};

/// A single value of a time series, stamped with the last candle used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub time: i64,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(time: i64, value: f64) -> Self {
        Self { time, value }
    }
}

/// A series point carrying its own render color (histograms, trend lines).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColoredPoint {
    pub time: i64,
    pub value: f64,
    pub color: String,
}

/// A point of a gapped series; `None` leaves a hole in the plotted line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapPoint {
    pub time: i64,
    pub value: Option<f64>,
}

/// Zip candle times with a NaN-padded value vector, dropping warmup entries.
///
/// `values` is aligned index-for-index with `times`.
pub fn to_points(times: impl IntoIterator<Item = i64>, values: &[f64]) -> Vec<SeriesPoint> {
    times
        .into_iter()
        .zip(values.iter())
        .filter(|(_, v)| v.is_finite())
        .map(|(time, &value)| SeriesPoint { time, value })
        .collect()
}
