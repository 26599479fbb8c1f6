//! Cross-band coupling matrix.
//!
//! A symmetric phase-amplitude coupling matrix over a fixed set of named
//! frequency bands: a random base matrix is symmetrized as `(M + Mᵀ)/2` and
//! scaled by the temporal valence. The only analyzer that consumes
//! randomness — the RNG is injected so a fixed seed reproduces the matrix
//! exactly.

use rand::Rng;
use serde::Serialize;

use crate::coherence::CoherenceSnapshot;

/// Number of frequency bands in the coupling matrix.
pub const NUM_BANDS: usize = 6;

/// A named frequency band (Hz).
#[derive(Debug, Clone, Copy)]
pub struct FrequencyBand {
    /// Band name.
    pub name: &'static str,
    /// Lower frequency bound (Hz).
    pub low_hz: f64,
    /// Upper frequency bound (Hz).
    pub high_hz: f64,
}

/// The fixed band table, delta through high gamma.
pub const FREQUENCY_BANDS: [FrequencyBand; NUM_BANDS] = [
    FrequencyBand { name: "delta", low_hz: 0.5, high_hz: 4.0 },
    FrequencyBand { name: "theta", low_hz: 4.0, high_hz: 8.0 },
    FrequencyBand { name: "alpha", low_hz: 8.0, high_hz: 13.0 },
    FrequencyBand { name: "beta", low_hz: 13.0, high_hz: 30.0 },
    FrequencyBand { name: "gamma", low_hz: 30.0, high_hz: 100.0 },
    FrequencyBand { name: "high_gamma", low_hz: 100.0, high_hz: 200.0 },
];

/// Symmetric coupling matrix over [`FREQUENCY_BANDS`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandCouplingMatrix {
    values: [[f64; NUM_BANDS]; NUM_BANDS],
}

impl BandCouplingMatrix {
    /// Coupling between bands `i` and `j`, or `None` out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get(i).and_then(|row| row.get(j)).copied()
    }

    /// The full matrix, row-major.
    #[inline]
    pub fn values(&self) -> &[[f64; NUM_BANDS]; NUM_BANDS] {
        &self.values
    }

    /// Band names in matrix order.
    pub fn band_names() -> [&'static str; NUM_BANDS] {
        let mut names = [""; NUM_BANDS];
        for (name, band) in names.iter_mut().zip(FREQUENCY_BANDS.iter()) {
            *name = band.name;
        }
        names
    }

    /// Whether the matrix is exactly symmetric.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..NUM_BANDS {
            for j in (i + 1)..NUM_BANDS {
                if self.values[i][j] != self.values[j][i] {
                    return false;
                }
            }
        }
        true
    }
}

/// Build the cross-band coupling matrix.
///
/// Symmetric for every run; identical across runs given the same RNG seed
/// and valence.
pub fn cross_band_coupling<R: Rng + ?Sized>(
    snapshot: CoherenceSnapshot,
    rng: &mut R,
) -> BandCouplingMatrix {
    let mut base = [[0.0; NUM_BANDS]; NUM_BANDS];
    for row in base.iter_mut() {
        for value in row.iter_mut() {
            *value = rng.gen::<f64>();
        }
    }

    let mut values = [[0.0; NUM_BANDS]; NUM_BANDS];
    for i in 0..NUM_BANDS {
        for j in 0..NUM_BANDS {
            values[i][j] = (base[i][j] + base[j][i]) / 2.0 * snapshot.v_tau;
        }
    }

    BandCouplingMatrix { values }
}
