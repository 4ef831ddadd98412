//! Study dispatcher.
//!
//! `StudyConfig` is the serde surface callers use to name a study and its
//! parameters (`type = "vwap"`, ...); `run_study` maps it onto the matching
//! indicator and wraps the result in `StudyOutput`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ann::{AnnOutput, AnnPredictor};
use crate::domain::{Candle, GapPoint, SeriesPoint};
use crate::error::ConfigError;
use crate::indicators::{
    Adx, AdxOutput, AnchoredVwap, Atr, Bollinger, BollingerOutput, Ema, Ichimoku, IchimokuOutput,
    Indicator, PivotOutput, PivotPoints, Rsi, Sma, Stochastic, StochasticOutput, Supertrend,
    SupertrendOutput, VolumeAnalysis, VolumeOutput, Vwap, VwapBands, VwapBandsOutput,
};
use crate::strategies::{
    FirstRedCandle, FirstRedCandleOutput, PriceActionRange, PriceActionRangeOutput, RangeBreakout,
    RangeBreakoutOutput,
};
use crate::tpo::{build_profiles, TpoConfig, TpoProfile};

fn period_14() -> usize {
    14
}

fn period_20() -> usize {
    20
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StudyConfig {
    Sma {
        #[serde(default = "period_20")]
        period: usize,
    },
    Ema {
        #[serde(default = "period_20")]
        period: usize,
    },
    Rsi {
        #[serde(default = "period_14")]
        period: usize,
    },
    Atr {
        #[serde(default = "period_14")]
        period: usize,
    },
    Stochastic(Stochastic),
    Bollinger(Bollinger),
    Supertrend(Supertrend),
    Adx(Adx),
    Ichimoku(Ichimoku),
    Pivots(PivotPoints),
    Volume(VolumeAnalysis),
    Vwap(Vwap),
    VwapBands(VwapBands),
    AnchoredVwap(AnchoredVwap),
    MarketProfile(TpoConfig),
    FirstRedCandle,
    PriceActionRange,
    RangeBreakout(RangeBreakout),
    Ann(AnnPredictor),
}

impl StudyConfig {
    /// Short label such as `sma_20` or `market_profile`.
    pub fn label(&self) -> String {
        match self {
            StudyConfig::Sma { period } => format!("sma_{period}"),
            StudyConfig::Ema { period } => format!("ema_{period}"),
            StudyConfig::Rsi { period } => format!("rsi_{period}"),
            StudyConfig::Atr { period } => format!("atr_{period}"),
            StudyConfig::Stochastic(_) => "stochastic".into(),
            StudyConfig::Bollinger(b) => format!("bollinger_{}", b.period),
            StudyConfig::Supertrend(_) => "supertrend".into(),
            StudyConfig::Adx(a) => format!("adx_{}", a.period),
            StudyConfig::Ichimoku(_) => "ichimoku".into(),
            StudyConfig::Pivots(_) => "pivots".into(),
            StudyConfig::Volume(_) => "volume".into(),
            StudyConfig::Vwap(_) => "vwap".into(),
            StudyConfig::VwapBands(_) => "vwap_bands".into(),
            StudyConfig::AnchoredVwap(_) => "anchored_vwap".into(),
            StudyConfig::MarketProfile(_) => "market_profile".into(),
            StudyConfig::FirstRedCandle => "first_red_candle".into(),
            StudyConfig::PriceActionRange => "price_action_range".into(),
            StudyConfig::RangeBreakout(_) => "range_breakout".into(),
            StudyConfig::Ann(_) => "ann".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum StudyOutput {
    Series(Vec<SeriesPoint>),
    GapSeries(Vec<GapPoint>),
    Stochastic(StochasticOutput),
    Bollinger(BollingerOutput),
    Supertrend(SupertrendOutput),
    Adx(AdxOutput),
    Ichimoku(IchimokuOutput),
    Pivots(PivotOutput),
    Volume(VolumeOutput),
    VwapBands(VwapBandsOutput),
    MarketProfile(Vec<TpoProfile>),
    FirstRedCandle(FirstRedCandleOutput),
    PriceActionRange(PriceActionRangeOutput),
    RangeBreakout(RangeBreakoutOutput),
    Ann(AnnOutput),
}

/// Run one study. Only a malformed market-profile window is an error;
/// every other study degrades to its empty output.
pub fn run_study(candles: &[Candle], config: &StudyConfig) -> Result<StudyOutput, ConfigError> {
    debug!(study = %config.label(), candles = candles.len(), "running study");
    let output = match config {
        StudyConfig::Sma { period } => StudyOutput::Series(Sma::new(*period).series(candles)),
        StudyConfig::Ema { period } => StudyOutput::Series(Ema::new(*period).series(candles)),
        StudyConfig::Rsi { period } => StudyOutput::Series(Rsi::new(*period).series(candles)),
        StudyConfig::Atr { period } => StudyOutput::Series(Atr::new(*period).series(candles)),
        StudyConfig::Stochastic(s) => StudyOutput::Stochastic(s.compute(candles)),
        StudyConfig::Bollinger(b) => StudyOutput::Bollinger(b.compute(candles)),
        StudyConfig::Supertrend(s) => StudyOutput::Supertrend(s.compute(candles)),
        StudyConfig::Adx(a) => StudyOutput::Adx(a.compute(candles)),
        StudyConfig::Ichimoku(i) => StudyOutput::Ichimoku(i.compute(candles)),
        StudyConfig::Pivots(p) => StudyOutput::Pivots(p.compute(candles)),
        StudyConfig::Volume(v) => StudyOutput::Volume(v.compute(candles)),
        StudyConfig::Vwap(v) => StudyOutput::Series(v.compute(candles)),
        StudyConfig::VwapBands(v) => StudyOutput::VwapBands(v.compute(candles)),
        StudyConfig::AnchoredVwap(v) => StudyOutput::GapSeries(v.compute(candles)),
        StudyConfig::MarketProfile(tpo) => {
            tpo.validate()?;
            StudyOutput::MarketProfile(build_profiles(candles, tpo))
        }
        StudyConfig::FirstRedCandle => StudyOutput::FirstRedCandle(FirstRedCandle.compute(candles)),
        StudyConfig::PriceActionRange => {
            StudyOutput::PriceActionRange(PriceActionRange.compute(candles))
        }
        StudyConfig::RangeBreakout(r) => StudyOutput::RangeBreakout(r.compute(candles)),
        StudyConfig::Ann(a) => StudyOutput::Ann(a.compute(candles)),
    };
    Ok(output)
}

/// A batch of studies, as written in a TOML file:
///
/// ```toml
/// [[studies]]
/// type = "sma"
/// period = 50
///
/// [[studies]]
/// type = "market_profile"
/// block_size = "1h"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyFile {
    #[serde(default)]
    pub studies: Vec<StudyConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyResult {
    pub label: String,
    #[serde(flatten)]
    pub output: StudyOutput,
}

impl StudyFile {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::InvalidStudyFile(e.to_string()))
    }

    pub fn run(&self, candles: &[Candle]) -> Result<Vec<StudyResult>, ConfigError> {
        self.studies
            .iter()
            .map(|config| {
                Ok(StudyResult {
                    label: config.label(),
                    output: run_study(candles, config)?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::make_candles;
    use crate::session::TimeOfDay;

    #[test]
    fn toml_defaults_fill_in() {
        let file = StudyFile::from_toml_str(
            r#"
            [[studies]]
            type = "rsi"

            [[studies]]
            type = "bollinger"
            multiplier = 2.5

            [[studies]]
            type = "first_red_candle"
            "#,
        )
        .unwrap();
        assert_eq!(file.studies[0], StudyConfig::Rsi { period: 14 });
        match &file.studies[1] {
            StudyConfig::Bollinger(b) => {
                assert_eq!(b.period, 20);
                assert_eq!(b.multiplier, 2.5);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(file.studies[2], StudyConfig::FirstRedCandle);
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = StudyFile::from_toml_str("[[studies]]\ntype = \"macd\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStudyFile(_)));
    }

    #[test]
    fn empty_profile_window_is_an_error() {
        let config = StudyConfig::MarketProfile(TpoConfig {
            session_start: TimeOfDay::from_hm(15, 0),
            session_end: TimeOfDay::from_hm(9, 0),
            ..TpoConfig::default()
        });
        let err = run_study(&make_candles(&[1.0, 2.0]), &config).unwrap_err();
        assert!(matches!(err, ConfigError::EmptySessionWindow { .. }));
    }

    #[test]
    fn sma_study_matches_indicator() {
        let candles = make_candles(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let out = run_study(&candles, &StudyConfig::Sma { period: 3 }).unwrap();
        assert_eq!(out, StudyOutput::Series(Sma::new(3).series(&candles)));
    }

    #[test]
    fn results_serialize_with_label_and_kind() {
        let candles = make_candles(&[1.0, 2.0, 3.0]);
        let file = StudyFile {
            studies: vec![StudyConfig::Ema { period: 2 }],
        };
        let results = file.run(&candles).unwrap();
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json[0]["label"], "ema_2");
        assert_eq!(json[0]["kind"], "series");
        assert_eq!(json[0]["data"].as_array().unwrap().len(), 2);
    }
}
