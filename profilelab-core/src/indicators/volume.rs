//! Volume analytics: colored histogram, moving average, relative volume
//! and spike markers.

use serde::{Deserialize, Serialize};

use super::sma::sma_of_series;
use crate::domain::{
    to_points, Candle, ColoredPoint, Marker, SeriesPoint, BEARISH_COLOR, BULLISH_COLOR,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeAnalysis {
    pub ma_period: usize,
    /// Volume at or above `spike_multiplier * average` is flagged.
    pub spike_multiplier: f64,
}

impl Default for VolumeAnalysis {
    fn default() -> Self {
        Self {
            ma_period: 20,
            spike_multiplier: 2.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeOutput {
    pub histogram: Vec<ColoredPoint>,
    pub average: Vec<SeriesPoint>,
    pub relative: Vec<SeriesPoint>,
    pub spikes: Vec<Marker>,
}

impl VolumeAnalysis {
    pub fn compute(&self, candles: &[Candle]) -> VolumeOutput {
        let volumes: Vec<f64> = candles.iter().map(|c| c.volume_or_zero()).collect();
        let average = sma_of_series(&volumes, self.ma_period.max(1));

        let histogram = candles
            .iter()
            .map(|c| ColoredPoint {
                time: c.time,
                value: c.volume_or_zero(),
                color: if c.close >= c.open {
                    BULLISH_COLOR
                } else {
                    BEARISH_COLOR
                }
                .to_string(),
            })
            .collect();

        let mut relative = Vec::new();
        let mut spikes = Vec::new();
        for (i, candle) in candles.iter().enumerate() {
            let avg = average[i];
            if avg.is_nan() || avg <= 0.0 {
                continue;
            }
            let ratio = volumes[i] / avg;
            relative.push(SeriesPoint::new(candle.time, ratio));
            if ratio >= self.spike_multiplier {
                spikes.push(Marker::note(candle.time, format!("Vol x{ratio:.1}")));
            }
        }

        VolumeOutput {
            histogram,
            average: to_points(candles.iter().map(|c| c.time), &average),
            relative,
            spikes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_candles};

    fn with_volumes(volumes: &[f64]) -> Vec<Candle> {
        let closes: Vec<f64> = (0..volumes.len()).map(|i| 100.0 + i as f64).collect();
        make_candles(&closes)
            .into_iter()
            .zip(volumes)
            .map(|(c, &v)| c.with_volume(v))
            .collect()
    }

    #[test]
    fn spike_flagged_against_trailing_average() {
        let candles = with_volumes(&[100.0, 100.0, 100.0, 700.0]);
        let out = VolumeAnalysis {
            ma_period: 3,
            spike_multiplier: 2.0,
        }
        .compute(&candles);

        assert_eq!(out.histogram.len(), 4);
        assert_eq!(out.average.len(), 2);
        assert_approx(out.relative[1].value, 700.0 / 300.0, 1e-12);
        assert_eq!(out.spikes.len(), 1);
        assert_eq!(out.spikes[0].time, candles[3].time);
    }

    #[test]
    fn histogram_colors_follow_candle_body() {
        let mut candles = with_volumes(&[10.0, 10.0]);
        candles[1].close = candles[1].open - 1.0;
        let out = VolumeAnalysis::default().compute(&candles);
        assert_eq!(out.histogram[0].color, BULLISH_COLOR);
        assert_eq!(out.histogram[1].color, BEARISH_COLOR);
    }

    #[test]
    fn missing_volume_never_spikes() {
        let candles: Vec<Candle> = make_candles(&[1.0, 2.0, 3.0, 4.0])
            .into_iter()
            .map(|mut c| {
                c.volume = None;
                c
            })
            .collect();
        let out = VolumeAnalysis {
            ma_period: 2,
            spike_multiplier: 1.0,
        }
        .compute(&candles);
        assert!(out.relative.is_empty());
        assert!(out.spikes.is_empty());
    }
}
