//! VWAP configuration: price sources and exchange session tables.

use serde::{Deserialize, Serialize};

use crate::domain::Candle;
use crate::session::TimeOfDay;

/// Which candle price feeds the volume-weighted average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    Open,
    High,
    Low,
    Close,
    Hl2,
    #[default]
    Hlc3,
    Ohlc4,
}

impl PriceSource {
    pub fn price(self, candle: &Candle) -> f64 {
        match self {
            PriceSource::Open => candle.open,
            PriceSource::High => candle.high,
            PriceSource::Low => candle.low,
            PriceSource::Close => candle.close,
            PriceSource::Hl2 => candle.hl2(),
            PriceSource::Hlc3 => candle.hlc3(),
            PriceSource::Ohlc4 => candle.ohlc4(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Exchange {
    #[default]
    Nse,
    Bse,
    Mcx,
    Nyse,
    Nasdaq,
    Crypto,
}

impl Exchange {
    /// Session open in exchange-local time.
    pub fn market_open(self) -> TimeOfDay {
        match self {
            Exchange::Nse | Exchange::Bse => TimeOfDay::from_hm(9, 15),
            Exchange::Mcx => TimeOfDay::from_hm(9, 0),
            Exchange::Nyse | Exchange::Nasdaq => TimeOfDay::from_hm(9, 30),
            Exchange::Crypto => TimeOfDay::from_hm(0, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VwapConfig {
    /// Restart the cumulative sums at each session boundary.
    pub reset_daily: bool,
    pub exchange: Exchange,
    pub source: PriceSource,
    /// Sessions start at the exchange open instead of midnight; earlier
    /// candles belong to the previous day's session.
    pub reset_at_market_open: bool,
    /// Weight every candle equally.
    pub ignore_volume: bool,
}

impl Default for VwapConfig {
    fn default() -> Self {
        Self {
            reset_daily: true,
            exchange: Exchange::Nse,
            source: PriceSource::Hlc3,
            reset_at_market_open: false,
            ignore_volume: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_deserialize_from_empty_toml() {
        let config: VwapConfig = toml::from_str("").unwrap();
        assert_eq!(config, VwapConfig::default());
    }

    #[test]
    fn exchange_and_source_names() {
        let config: VwapConfig =
            toml::from_str("exchange = \"MCX\"\nsource = \"ohlc4\"").unwrap();
        assert_eq!(config.exchange, Exchange::Mcx);
        assert_eq!(config.source, PriceSource::Ohlc4);
        assert_eq!(config.exchange.market_open().minutes(), 540);
    }
}
