//! Spectral analysis of the coherence history.
//!
//! Computes a forward DFT of the order-parameter time series, takes squared
//! magnitudes as power, and reports the dominant non-DC frequency in the
//! first half of the spectrum. Pure function of the history; no hidden
//! state.

use std::cmp::Ordering;

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;
use serde::{Deserialize, Serialize};

/// Minimum number of history samples required for spectral analysis.
pub const MIN_SPECTRUM_SAMPLES: usize = 10;

/// Dominant-frequency report over the coherence history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonicSpectrum {
    /// Frequency of the strongest non-DC bin, in cycles per sample.
    pub dominant_frequency: f64,

    /// Power (squared DFT magnitude) at the dominant bin.
    pub spectral_power: f64,

    /// Peak-to-mean power ratio over the whole spectrum.
    pub harmonic_quality: f64,
}

/// Analyze the accumulated order-parameter history.
///
/// Returns `None` when fewer than [`MIN_SPECTRUM_SAMPLES`] samples exist —
/// a valid, expected outcome while the history warms up, not an error.
///
/// The peak search covers indices `1..n/2`: the DC bin is excluded, and the
/// mirrored upper half carries no extra information for a real signal.
pub fn analyze_harmonic_spectrum(history: &[f64]) -> Option<HarmonicSpectrum> {
    let n = history.len();
    if n < MIN_SPECTRUM_SAMPLES {
        return None;
    }

    let mut buffer: Vec<Complex<f64>> = history
        .iter()
        .map(|&sample| Complex::new(sample, 0.0))
        .collect();
    let mut planner = FftPlanner::new();
    planner.plan_fft_forward(n).process(&mut buffer);

    let power: Vec<f64> = buffer.iter().map(|c| c.norm_sqr()).collect();

    let (peak_index, peak_power) = power[1..n / 2]
        .iter()
        .enumerate()
        .map(|(k, &p)| (k + 1, p))
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))?;

    let max_power = power.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let mean_power = power.iter().sum::<f64>() / power.len() as f64;
    let harmonic_quality = if mean_power > f64::EPSILON {
        max_power / mean_power
    } else {
        tracing::warn!("spectrum has zero mean power, harmonic quality degenerate");
        0.0
    };

    Some(HarmonicSpectrum {
        dominant_frequency: peak_index as f64 / n as f64,
        spectral_power: peak_power,
        harmonic_quality,
    })
}
