//! Forward pass of the fixed 15-30-9-1 tanh network.

use super::weights::{HIDDEN_1, HIDDEN_2, OUTPUT};

pub const INPUTS: usize = 15;

fn dense<const IN: usize, const OUT: usize>(
    weights: &[[f64; IN]; OUT],
    input: &[f64; IN],
) -> [f64; OUT] {
    let mut out = [0.0; OUT];
    for (neuron, row) in out.iter_mut().zip(weights) {
        let sum: f64 = row.iter().zip(input).map(|(w, x)| w * x).sum();
        *neuron = sum.tanh();
    }
    out
}

/// Network output for one scalar feature broadcast to every input.
///
/// No biases, so `forward(0.0) == 0.0` and the map is odd.
pub fn forward(feature: f64) -> f64 {
    let input = [feature; INPUTS];
    let hidden_1 = dense(&HIDDEN_1, &input);
    let hidden_2 = dense(&HIDDEN_2, &hidden_1);
    let sum: f64 = OUTPUT.iter().zip(&hidden_2).map(|(w, x)| w * x).sum();
    sum.tanh()
}
