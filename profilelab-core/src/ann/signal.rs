//! Directional state with hysteresis.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalState {
    #[default]
    Unset,
    Long,
    Short,
}

impl SignalState {
    /// Outputs inside `[-threshold, threshold]` keep the current state.
    pub fn transition(self, output: f64, threshold: f64) -> Self {
        if output > threshold {
            SignalState::Long
        } else if output < -threshold {
            SignalState::Short
        } else {
            self
        }
    }
}
