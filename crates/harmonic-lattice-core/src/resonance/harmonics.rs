//! Golden-modulated harmonic series.
//!
//! For order n the series frequency is `base · n · φ^(n/12)`; the network's
//! response at each frequency is a Lorentzian centered on the base frequency
//! scaled by the temporal valence:
//!
//! ```text
//! Lorentzian(f) = w² / ((f − base)² + w²),  w = 50 Hz
//! response      = min(1, Lorentzian(f) · v_tau)
//! ```

use serde::{Deserialize, Serialize};

use crate::coherence::CoherenceSnapshot;
use crate::GOLDEN_RATIO;

/// Half-width of the network's Lorentzian response curve (Hz).
pub const LORENTZIAN_WIDTH_HZ: f64 = 50.0;

/// Speed of sound used for wavelength reporting (m/s).
const SPEED_OF_SOUND_M_PER_S: f64 = 343.0;

/// One member of the harmonic series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Harmonic {
    /// Harmonic order, starting at 1.
    pub order: u32,

    /// `base · order · φ^(order/12)` (Hz).
    pub frequency_hz: f64,

    /// Acoustic wavelength at this frequency (m).
    pub wavelength_m: f64,

    /// Lorentzian response scaled by `v_tau`, clamped to `[0, 1]`.
    pub network_response: f64,

    /// The golden-ratio modulation factor `φ^(order/12)`.
    pub golden_modulation: f64,
}

/// Generate the harmonic series for orders `1..=octaves`.
///
/// Deterministic given `v_tau`.
pub fn harmonic_series(
    fundamental_hz: f64,
    octaves: u32,
    snapshot: CoherenceSnapshot,
) -> Vec<Harmonic> {
    (1..=octaves)
        .map(|order| {
            let golden_modulation = GOLDEN_RATIO.powf(order as f64 / 12.0);
            let frequency_hz = fundamental_hz * order as f64 * golden_modulation;

            let width_sq = LORENTZIAN_WIDTH_HZ * LORENTZIAN_WIDTH_HZ;
            let detune = frequency_hz - fundamental_hz;
            let lorentzian = width_sq / (detune * detune + width_sq);
            let network_response = (lorentzian * snapshot.v_tau).min(1.0);

            // frequency_hz is positive for any positive fundamental; the
            // epsilon keeps the wavelength finite even for degenerate input.
            let wavelength_m = SPEED_OF_SOUND_M_PER_S / frequency_hz.max(f64::EPSILON);

            Harmonic {
                order,
                frequency_hz,
                wavelength_m,
                network_response,
                golden_modulation,
            }
        })
        .collect()
}
