//! ProfileLab Core: indicator computations over OHLC candles.
//!
//! Everything here is a pure function of its inputs:
//! - Session classification (calendar day, market hours, windows)
//! - Classic indicators (moving averages, oscillators, bands, VWAP family)
//! - Market Profile (TPO) sessions with POC, value area and rotation
//! - Day-segmented strategy studies (first red candle, PAR, opening range)
//! - Fixed-weight ANN direction predictor
//! - Position-size risk calculator
//! - A serde-tagged study dispatcher for config-driven callers

pub mod ann;
pub mod domain;
pub mod error;
pub mod indicators;
pub mod risk;
pub mod session;
pub mod strategies;
pub mod study;
pub mod tpo;

pub use error::ConfigError;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: configs and outputs can cross threads.
    ///
    /// Callers run studies on worker threads; a non-Send field anywhere in
    /// these types breaks the build here first.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        // Domain types
        require_send::<domain::Candle>();
        require_sync::<domain::Candle>();
        require_send::<domain::Marker>();
        require_sync::<domain::Marker>();
        require_send::<domain::SignalEvent>();
        require_sync::<domain::SignalEvent>();

        // Session grouping
        require_send::<session::DayGroups>();
        require_sync::<session::DayGroups>();

        // Indicators
        require_send::<Box<dyn indicators::Indicator>>();
        require_sync::<Box<dyn indicators::Indicator>>();
        require_send::<indicators::VwapBands>();
        require_sync::<indicators::VwapBands>();
        require_send::<indicators::PivotOutput>();
        require_sync::<indicators::PivotOutput>();

        // Market profile
        require_send::<tpo::TpoConfig>();
        require_sync::<tpo::TpoConfig>();
        require_send::<tpo::TpoProfile>();
        require_sync::<tpo::TpoProfile>();

        // Strategies, predictor, risk
        require_send::<strategies::PriceActionRangeOutput>();
        require_sync::<strategies::PriceActionRangeOutput>();
        require_send::<ann::AnnOutput>();
        require_sync::<ann::AnnOutput>();
        require_send::<risk::RiskReport>();
        require_sync::<risk::RiskReport>();

        // Dispatcher
        require_send::<study::StudyConfig>();
        require_sync::<study::StudyConfig>();
        require_send::<study::StudyOutput>();
        require_sync::<study::StudyOutput>();
    }

    /// Studies are plain functions of their input: running one twice on the
    /// same candles gives the same output.
    #[test]
    fn studies_are_referentially_transparent() {
        let candles = indicators::make_candles(&[10.0, 11.0, 10.5, 12.0, 11.5, 13.0, 12.5]);
        let config = study::StudyConfig::Bollinger(indicators::Bollinger::new(3, 2.0));
        let first = study::run_study(&candles, &config).unwrap();
        let second = study::run_study(&candles, &config).unwrap();
        assert_eq!(first, second);
    }
}
