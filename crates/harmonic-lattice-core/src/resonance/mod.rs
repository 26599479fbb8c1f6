//! Stateless resonance analyzers.
//!
//! Each function here is a pure function of a [`CoherenceSnapshot`]
//! (and fixed constants); none of them mutate the network. The cross-band
//! coupling matrix additionally draws randomness and therefore takes an
//! injected RNG so its output is reproducible under a fixed seed.

mod coupling;
mod entrainment;
mod harmonics;
mod quantum;
mod scales;

pub use coupling::{cross_band_coupling, BandCouplingMatrix, FrequencyBand, FREQUENCY_BANDS, NUM_BANDS};
pub use entrainment::{schumann_entrainment, ResonanceMatch, MAX_Q_FACTOR, SCHUMANN_FREQUENCIES_HZ};
pub use harmonics::{harmonic_series, Harmonic, LORENTZIAN_WIDTH_HZ};
pub use quantum::{
    decoherence_estimate, DecoherenceEstimate, AMBIENT_TEMPERATURE_K, BOLTZMANN_J_PER_K,
    REDUCED_PLANCK_J_S,
};
pub use scales::{multi_scale_coherence, ScaleCoherence, TimescaleBand, TIMESCALE_BANDS};
