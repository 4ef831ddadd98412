//! Domain types: candles in, points and markers out.

pub mod candle;
pub mod marker;
pub mod point;

pub use candle::{Candle, CandleColor};
pub use marker::{
    Marker, MarkerPosition, MarkerShape, SignalEvent, SignalKind, BEARISH_COLOR, BULLISH_COLOR,
    NEUTRAL_COLOR,
};
pub use point::{to_points, ColoredPoint, GapPoint, SeriesPoint};
