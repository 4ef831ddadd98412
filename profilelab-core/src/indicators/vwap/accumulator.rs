//! Running VWAP sums for one session.

use crate::domain::Candle;

use super::config::VwapConfig;

/// Cumulative price*volume, volume and price^2*volume.
#[derive(Debug, Clone, Default)]
pub(crate) struct VwapAccumulator {
    sum_pv: f64,
    sum_v: f64,
    sum_p2v: f64,
    last: Option<f64>,
}

/// One step of the accumulator.
#[derive(Debug, Clone, Copy)]
pub(crate) struct VwapValue {
    pub vwap: f64,
    /// Volume-weighted standard deviation around the VWAP.
    pub stddev: f64,
}

impl VwapAccumulator {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fold one candle. A candle without volume does not touch the sums and
    /// repeats the last VWAP (or its own price if there is none yet).
    pub fn push(&mut self, candle: &Candle, config: &VwapConfig) -> VwapValue {
        let price = config.source.price(candle);
        let volume = if config.ignore_volume {
            1.0
        } else {
            candle.volume_or_zero()
        };

        if volume <= 0.0 || !volume.is_finite() {
            let vwap = self.last.unwrap_or(price);
            return VwapValue {
                vwap,
                stddev: self.stddev(vwap),
            };
        }

        self.sum_pv += price * volume;
        self.sum_v += volume;
        self.sum_p2v += price * price * volume;

        let vwap = self.sum_pv / self.sum_v;
        self.last = Some(vwap);
        VwapValue {
            vwap,
            stddev: self.stddev(vwap),
        }
    }

    fn stddev(&self, vwap: f64) -> f64 {
        if self.sum_v <= 0.0 {
            return 0.0;
        }
        (self.sum_p2v / self.sum_v - vwap * vwap).max(0.0).sqrt()
    }
}
