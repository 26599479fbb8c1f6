//! Temporal-coherence state.
//!
//! The network maintains one [`TemporalCoherence`] record, updated every
//! step from the order parameter:
//!
//! ```text
//! tau_k = tau_base + 1.5 · R
//! v_tau = R
//! ```
//!
//! Analyzers never read the network directly; they take an immutable
//! [`CoherenceSnapshot`] so they stay pure and independently testable.

use serde::{Deserialize, Serialize};

/// Gain applied to the order parameter when deriving `tau_k`.
pub const COHERENCE_GAIN: f64 = 1.5;

/// Default temporal valence before the first measurement.
pub const DEFAULT_V_TAU: f64 = 0.85;

/// Mutable temporal-coherence record owned by the network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporalCoherence {
    /// Base coherence coefficient; external adjustments fold into this so
    /// they survive the per-step `tau_k` recomputation.
    pub(crate) tau_base: f64,

    /// Coherence coefficient derived from the most recent order parameter.
    pub(crate) tau_k: f64,

    /// Temporal valence: the most recent order parameter.
    pub(crate) v_tau: f64,
}

impl TemporalCoherence {
    /// Create a coherence record anchored at the given base coefficient.
    pub fn with_base(tau_base: f64) -> Self {
        Self {
            tau_base,
            tau_k: tau_base,
            v_tau: DEFAULT_V_TAU,
        }
    }

    /// Base coherence coefficient (before the order-parameter contribution).
    #[inline]
    pub fn tau_base(&self) -> f64 {
        self.tau_base
    }

    /// Current coherence coefficient.
    #[inline]
    pub fn tau_k(&self) -> f64 {
        self.tau_k
    }

    /// Temporal valence (most recent order parameter).
    #[inline]
    pub fn v_tau(&self) -> f64 {
        self.v_tau
    }

    /// Immutable view consumed by the resonance analyzers.
    #[inline]
    pub fn snapshot(&self) -> CoherenceSnapshot {
        CoherenceSnapshot {
            tau_k: self.tau_k,
            v_tau: self.v_tau,
        }
    }

    /// Volumetric-present scalar: `tau_k · v_tau · e`.
    pub fn temporal_depth(&self) -> f64 {
        self.tau_k * self.v_tau * std::f64::consts::E
    }
}

impl Default for TemporalCoherence {
    fn default() -> Self {
        Self::with_base(7.5)
    }
}

/// Immutable `{tau_k, v_tau}` view of the coherence state.
///
/// `Copy` by design: every resonance analyzer is a pure function of this
/// snapshot (plus fixed constants, and an injected RNG for the cross-band
/// coupling matrix).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoherenceSnapshot {
    /// Coherence coefficient.
    pub tau_k: f64,
    /// Temporal valence.
    pub v_tau: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let coherence = TemporalCoherence::default();
        assert!((coherence.tau_base() - 7.5).abs() < f64::EPSILON);
        assert!((coherence.tau_k() - 7.5).abs() < f64::EPSILON);
        assert!((coherence.v_tau() - DEFAULT_V_TAU).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snapshot_copies_current_state() {
        let mut coherence = TemporalCoherence::with_base(7.5);
        coherence.tau_k = 8.2;
        coherence.v_tau = 0.47;

        let snapshot = coherence.snapshot();
        assert!((snapshot.tau_k - 8.2).abs() < f64::EPSILON);
        assert!((snapshot.v_tau - 0.47).abs() < f64::EPSILON);
    }

    #[test]
    fn test_temporal_depth() {
        let coherence = TemporalCoherence::default();
        let expected = 7.5 * DEFAULT_V_TAU * std::f64::consts::E;
        assert!((coherence.temporal_depth() - expected).abs() < 1e-12);
    }
}
