//! Schumann-resonance entrainment matching.
//!
//! Scores how closely each fixed reference frequency matches an integer
//! multiple of the network's base frequency. Every division and logarithm
//! that could go degenerate is epsilon-guarded; a NaN or infinity reaching
//! the returned result would be a defect.

use serde::{Deserialize, Serialize};

/// The five Schumann resonance modes (Hz).
pub const SCHUMANN_FREQUENCIES_HZ: [f64; 5] = [7.83, 14.3, 20.8, 27.3, 33.8];

/// Cap on the reported Q-factor.
pub const MAX_Q_FACTOR: f64 = 100.0;

/// Epsilon substituted into detune logarithms and zero denominators.
const RATIO_EPSILON: f64 = 0.001;

/// Resonance match against one reference frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResonanceMatch {
    /// The reference frequency (Hz).
    pub reference_hz: f64,

    /// `reference / base_frequency`.
    pub harmonic_ratio: f64,

    /// `exp(−|ln(ratio / round(ratio))|)`, 1.0 at a perfect integer match.
    pub resonance_strength: f64,

    /// `1 / |log10(|ratio − round(ratio)| + ε)|`, capped at [`MAX_Q_FACTOR`].
    pub q_factor: f64,
}

/// Match every Schumann mode against the given base frequency.
///
/// Deterministic given the base frequency; no randomness involved.
pub fn schumann_entrainment(base_frequency_hz: f64) -> Vec<ResonanceMatch> {
    // Zero base would blow up the ratio; substitute the same epsilon used
    // for rounded-to-zero ratios. Validated configs never hit this.
    let base = if base_frequency_hz.abs() < f64::EPSILON {
        RATIO_EPSILON
    } else {
        base_frequency_hz
    };

    SCHUMANN_FREQUENCIES_HZ
        .iter()
        .map(|&reference_hz| {
            let harmonic_ratio = reference_hz / base;
            let nearest = harmonic_ratio.round();

            let detune = (harmonic_ratio - nearest).abs() + RATIO_EPSILON;
            let log_detune = detune.log10().abs();
            let q_factor = if log_detune < f64::EPSILON {
                MAX_Q_FACTOR
            } else {
                (1.0 / log_detune).min(MAX_Q_FACTOR)
            };

            let nearest = if nearest == 0.0 { RATIO_EPSILON } else { nearest };
            let resonance_strength = (-(harmonic_ratio / nearest).abs().ln().abs()).exp();

            ResonanceMatch {
                reference_hz,
                harmonic_ratio,
                resonance_strength,
                q_factor,
            }
        })
        .collect()
}
