//! Multi-scale coherence.
//!
//! Projects the coherence coefficient onto a fixed table of named timescale
//! ranges: `scale_tau = tau_k · log10(t_max / t_min)`, squashed through
//! `tanh(scale_tau / 10)`.

use serde::Serialize;

use crate::coherence::CoherenceSnapshot;

/// A named timescale range in seconds.
#[derive(Debug, Clone, Copy)]
pub struct TimescaleBand {
    /// Band name.
    pub name: &'static str,
    /// Lower bound of the range (seconds).
    pub t_min_s: f64,
    /// Upper bound of the range (seconds).
    pub t_max_s: f64,
    /// Human-readable description.
    pub description: &'static str,
}

/// The fixed timescale table, from femtoseconds to evolutionary time.
pub const TIMESCALE_BANDS: [TimescaleBand; 5] = [
    TimescaleBand {
        name: "quantum",
        t_min_s: 1e-15,
        t_max_s: 1e-12,
        description: "Quantum coherence timescales",
    },
    TimescaleBand {
        name: "cellular",
        t_min_s: 1e-6,
        t_max_s: 1e-3,
        description: "Hyphal growth rhythms",
    },
    TimescaleBand {
        name: "network",
        t_min_s: 1.0,
        t_max_s: 100.0,
        description: "Lattice synchronization",
    },
    TimescaleBand {
        name: "ecosystem",
        t_min_s: 3_600.0,
        t_max_s: 86_400.0,
        description: "Circadian and seasonal",
    },
    TimescaleBand {
        name: "geological",
        t_min_s: 3.154e7,
        t_max_s: 3.154e9,
        description: "Evolutionary timescales",
    },
];

/// Coherence projected onto one timescale band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleCoherence {
    /// Band name from [`TIMESCALE_BANDS`].
    pub scale: &'static str,
    /// `tanh(tau_k · log10(t_max/t_min) / 10)`, in `(0, 1)` for positive tau_k.
    pub coherence: f64,
}

/// Compute coherence across every band in [`TIMESCALE_BANDS`].
///
/// Deterministic given `tau_k`.
pub fn multi_scale_coherence(snapshot: CoherenceSnapshot) -> Vec<ScaleCoherence> {
    TIMESCALE_BANDS
        .iter()
        .map(|band| {
            let scale_tau = snapshot.tau_k * (band.t_max_s / band.t_min_s).log10();
            ScaleCoherence {
                scale: band.name,
                coherence: (scale_tau / 10.0).tanh(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(tau_k: f64) -> CoherenceSnapshot {
        CoherenceSnapshot { tau_k, v_tau: 0.8 }
    }

    #[test]
    fn test_one_entry_per_band() {
        let scales = multi_scale_coherence(snapshot(7.5));
        assert_eq!(scales.len(), TIMESCALE_BANDS.len());
        for (result, band) in scales.iter().zip(TIMESCALE_BANDS.iter()) {
            assert_eq!(result.scale, band.name);
        }
    }

    #[test]
    fn test_coherence_bounded_by_tanh() {
        for tau_k in [0.1, 7.5, 50.0] {
            for scale in multi_scale_coherence(snapshot(tau_k)) {
                assert!(
                    (0.0..1.0).contains(&scale.coherence),
                    "{}: {} out of (0,1)",
                    scale.scale,
                    scale.coherence
                );
            }
        }
    }

    #[test]
    fn test_known_value() {
        // The quantum band spans three decades, the network band two.
        let scales = multi_scale_coherence(snapshot(7.5));
        let expected = (7.5 * 3.0 / 10.0_f64).tanh();
        assert!((scales[0].coherence - expected).abs() < 1e-12);

        let network_expected = (7.5 * 2.0 / 10.0_f64).tanh();
        assert!((scales[2].coherence - network_expected).abs() < 1e-12);
    }

    #[test]
    fn test_deterministic() {
        let a = multi_scale_coherence(snapshot(8.3));
        let b = multi_scale_coherence(snapshot(8.3));
        assert_eq!(a, b);
    }
}
