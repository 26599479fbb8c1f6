//! Thermal-decoherence estimate.
//!
//! Combines fixed physical constants with the coherence coefficient:
//! `tau_k²` acts as a protection factor multiplying the thermal coherence
//! time `ħ/(k_B·T)`; the resulting decoherence rate is compared against the
//! classical threshold `k_B·T/ħ` to decide the quantum-regime flag.

use serde::{Deserialize, Serialize};

use crate::coherence::CoherenceSnapshot;

/// Reduced Planck constant (J·s).
pub const REDUCED_PLANCK_J_S: f64 = 1.054571817e-34;

/// Boltzmann constant (J/K).
pub const BOLTZMANN_J_PER_K: f64 = 1.380649e-23;

/// Ambient temperature assumed for the estimate (K).
pub const AMBIENT_TEMPERATURE_K: f64 = 298.0;

/// Floor for the protection factor so the decoherence rate stays finite
/// even at tau_k = 0.
const MIN_PROTECTION_FACTOR: f64 = 1e-12;

/// Decoherence estimate derived from the coherence coefficient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecoherenceEstimate {
    /// Bare thermal coherence time `ħ/(k_B·T)` (s).
    pub thermal_coherence_time_s: f64,

    /// Protection factor `tau_k²` (epsilon-floored).
    pub protection_factor: f64,

    /// `thermal_coherence_time · protection_factor` (s).
    pub effective_coherence_time_s: f64,

    /// Inverse of the effective coherence time (Hz).
    pub decoherence_rate_hz: f64,

    /// Classical threshold `k_B·T/ħ` (Hz).
    pub classical_threshold_hz: f64,

    /// True when the decoherence rate is below the classical threshold.
    pub quantum_regime: bool,
}

/// Estimate decoherence properties for the current coherence state.
///
/// Deterministic given `tau_k`.
pub fn decoherence_estimate(snapshot: CoherenceSnapshot) -> DecoherenceEstimate {
    let thermal_coherence_time_s =
        REDUCED_PLANCK_J_S / (BOLTZMANN_J_PER_K * AMBIENT_TEMPERATURE_K);
    let protection_factor = (snapshot.tau_k * snapshot.tau_k).max(MIN_PROTECTION_FACTOR);
    let effective_coherence_time_s = thermal_coherence_time_s * protection_factor;
    let decoherence_rate_hz = 1.0 / effective_coherence_time_s;
    let classical_threshold_hz =
        (BOLTZMANN_J_PER_K * AMBIENT_TEMPERATURE_K) / REDUCED_PLANCK_J_S;

    DecoherenceEstimate {
        thermal_coherence_time_s,
        protection_factor,
        effective_coherence_time_s,
        decoherence_rate_hz,
        classical_threshold_hz,
        quantum_regime: decoherence_rate_hz < classical_threshold_hz,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(tau_k: f64) -> CoherenceSnapshot {
        CoherenceSnapshot { tau_k, v_tau: 0.8 }
    }

    #[test]
    fn test_thermal_time_order_of_magnitude() {
        let estimate = decoherence_estimate(snapshot(7.5));
        // ħ/(k_B · 298K) is about 25.6 femtoseconds.
        assert!(estimate.thermal_coherence_time_s > 1e-14);
        assert!(estimate.thermal_coherence_time_s < 1e-13);
    }

    #[test]
    fn test_protection_factor_is_tau_squared() {
        let estimate = decoherence_estimate(snapshot(9.0));
        assert!((estimate.protection_factor - 81.0).abs() < 1e-9);
    }

    #[test]
    fn test_quantum_regime_requires_protection_above_unity() {
        // rate = threshold / tau_k², so the flag flips exactly at tau_k = 1.
        assert!(decoherence_estimate(snapshot(7.5)).quantum_regime);
        assert!(!decoherence_estimate(snapshot(0.5)).quantum_regime);
    }

    #[test]
    fn test_zero_tau_stays_finite() {
        let estimate = decoherence_estimate(snapshot(0.0));
        assert!(estimate.decoherence_rate_hz.is_finite());
        assert!(estimate.effective_coherence_time_s > 0.0);
        assert!(!estimate.quantum_regime);
    }

    #[test]
    fn test_deterministic() {
        let a = decoherence_estimate(snapshot(8.1));
        let b = decoherence_estimate(snapshot(8.1));
        assert_eq!(a, b);
    }
}
