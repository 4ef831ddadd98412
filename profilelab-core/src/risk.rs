//! Position-size calculator.
//!
//! # Formula
//! ```text
//! risk_amount    = capital * risk_percent / 100
//! sl_points      = |entry - stop_loss|
//! quantity       = floor(risk_amount / sl_points)
//! position_value = quantity * entry
//! target         = explicit, or entry ± sl_points * risk_reward_ratio
//! ```
//!
//! # Example
//! Capital 100,000 risking 1% on a BUY at 100 with the stop at 95 sizes
//! 200 units worth 20,000; at 1 : 2 the target is 110 for a 2,000 reward.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    #[serde(alias = "buy")]
    Buy,
    #[serde(alias = "sell")]
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskParams {
    pub capital: f64,
    pub risk_percent: f64,
    pub entry: f64,
    pub stop_loss: f64,
    pub side: Side,
    #[serde(default)]
    pub target: Option<f64>,
    /// Used only when `target` is absent.
    #[serde(default = "default_risk_reward")]
    pub risk_reward_ratio: f64,
}

fn default_risk_reward() -> f64 {
    2.0
}

impl RiskParams {
    pub fn new(capital: f64, risk_percent: f64, entry: f64, stop_loss: f64, side: Side) -> Self {
        Self {
            capital,
            risk_percent,
            entry,
            stop_loss,
            side,
            target: None,
            risk_reward_ratio: default_risk_reward(),
        }
    }

    pub fn with_target(mut self, target: f64) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_risk_reward(mut self, ratio: f64) -> Self {
        self.risk_reward_ratio = ratio;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    #[error("capital must be greater than 0")]
    NonPositiveCapital,
    #[error("risk percent must be between 0 and 100")]
    InvalidRiskPercent,
    #[error("entry price must be greater than 0")]
    NonPositiveEntry,
    #[error("stop loss must be greater than 0")]
    NonPositiveStopLoss,
    #[error("stop loss must be below entry for BUY")]
    StopAboveEntryForBuy,
    #[error("stop loss must be above entry for SELL")]
    StopBelowEntryForSell,
    #[error("target must be above entry for BUY")]
    TargetBelowEntryForBuy,
    #[error("target must be below entry for SELL")]
    TargetAboveEntryForSell,
    #[error("risk:reward ratio must be greater than 0")]
    NonPositiveRiskReward,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    pub risk_amount: f64,
    pub sl_points: f64,
    pub quantity: u64,
    pub position_value: f64,
    pub target: f64,
    pub reward_points: f64,
    pub reward_amount: f64,
    pub rr_ratio: f64,
    /// `"1 : N"`.
    pub rr_display: String,
}

/// Check every input without computing anything.
pub fn validate_risk_params(params: &RiskParams) -> Result<(), RiskError> {
    let positive = |v: f64| v.is_finite() && v > 0.0;

    if !positive(params.capital) {
        return Err(RiskError::NonPositiveCapital);
    }
    if !positive(params.risk_percent) || params.risk_percent > 100.0 {
        return Err(RiskError::InvalidRiskPercent);
    }
    if !positive(params.entry) {
        return Err(RiskError::NonPositiveEntry);
    }
    if !positive(params.stop_loss) {
        return Err(RiskError::NonPositiveStopLoss);
    }

    match params.side {
        Side::Buy if params.stop_loss >= params.entry => {
            return Err(RiskError::StopAboveEntryForBuy)
        }
        Side::Sell if params.stop_loss <= params.entry => {
            return Err(RiskError::StopBelowEntryForSell)
        }
        _ => {}
    }

    match (params.side, params.target) {
        (Side::Buy, Some(t)) if !(t > params.entry) => Err(RiskError::TargetBelowEntryForBuy),
        (Side::Sell, Some(t)) if !(t < params.entry) => Err(RiskError::TargetAboveEntryForSell),
        (_, None) if !positive(params.risk_reward_ratio) => Err(RiskError::NonPositiveRiskReward),
        _ => Ok(()),
    }
}

pub fn calculate_risk(params: &RiskParams) -> Result<RiskResult, RiskError> {
    validate_risk_params(params)?;

    let risk_amount = params.capital * params.risk_percent / 100.0;
    let sl_points = (params.entry - params.stop_loss).abs();
    // a risk amount below one unit's stop distance sizes to zero
    let quantity = (risk_amount / sl_points).floor();

    let target = params.target.unwrap_or_else(|| match params.side {
        Side::Buy => params.entry + sl_points * params.risk_reward_ratio,
        Side::Sell => params.entry - sl_points * params.risk_reward_ratio,
    });
    let reward_points = (target - params.entry).abs();
    let rr_ratio = reward_points / sl_points;

    Ok(RiskResult {
        risk_amount,
        sl_points,
        quantity: quantity as u64,
        position_value: quantity * params.entry,
        target,
        reward_points,
        reward_amount: quantity * reward_points,
        rr_ratio,
        rr_display: format_ratio(rr_ratio),
    })
}

/// `2.0` → `"1 : 2"`, `2.5` → `"1 : 2.5"`, at most two decimals.
fn format_ratio(ratio: f64) -> String {
    let text = format!("{ratio:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("1 : {text}")
}

/// Serializable outcome: `{"error": ...}` or `{"success": true, ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RiskReport {
    Failure {
        error: String,
    },
    Success {
        success: bool,
        #[serde(flatten)]
        result: RiskResult,
    },
}

impl From<Result<RiskResult, RiskError>> for RiskReport {
    fn from(outcome: Result<RiskResult, RiskError>) -> Self {
        match outcome {
            Ok(result) => RiskReport::Success {
                success: true,
                result,
            },
            Err(e) => RiskReport::Failure {
                error: e.to_string(),
            },
        }
    }
}

impl RiskReport {
    pub fn calculate(params: &RiskParams) -> Self {
        calculate_risk(params).into()
    }
}
