//! Short-horizon coherence extrapolation.
//!
//! A single-lag mean-reverting recursion over the recent history window —
//! deliberately not a fitted autoregressive model. Each prediction moves
//! half the window slope forward and one tenth of the way back toward the
//! window mean, clamped to `[0, 1]`.

use serde::{Deserialize, Serialize};

/// At most this many most-recent samples feed the forecast.
pub const FORECAST_WINDOW: usize = 50;

/// Minimum samples (inside the window) required to forecast.
pub const MIN_FORECAST_SAMPLES: usize = 10;

/// Fraction of the window slope carried into each prediction.
const SLOPE_DAMPING: f64 = 0.5;

/// Per-step pull toward the window mean.
const MEAN_REVERSION: f64 = 0.1;

/// Forecast of future order-parameter values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoherenceForecast {
    /// Predicted values, exactly `horizon` of them, each in `[0, 1]`.
    pub values: Vec<f64>,

    /// Arithmetic mean of the history window.
    pub window_mean: f64,

    /// Mean first difference over the history window.
    pub window_slope: f64,
}

/// Extrapolate `horizon` future order-parameter values from recent history.
///
/// Returns `None` when fewer than [`MIN_FORECAST_SAMPLES`] samples are
/// available in the (at most [`FORECAST_WINDOW`]-sample) window — expected
/// while the history warms up, not an error. A horizon of zero yields an
/// empty value sequence.
pub fn predict_coherence(history: &[f64], horizon: usize) -> Option<CoherenceForecast> {
    let start = history.len().saturating_sub(FORECAST_WINDOW);
    let window = &history[start..];
    if window.len() < MIN_FORECAST_SAMPLES {
        return None;
    }

    let window_slope = window.windows(2).map(|pair| pair[1] - pair[0]).sum::<f64>()
        / (window.len() - 1) as f64;
    let window_mean = window.iter().sum::<f64>() / window.len() as f64;

    let mut values = Vec::with_capacity(horizon);
    let mut previous = window[window.len() - 1];
    for _ in 0..horizon {
        let next = (previous + SLOPE_DAMPING * window_slope
            + MEAN_REVERSION * (window_mean - previous))
            .clamp(0.0, 1.0);
        values.push(next);
        previous = next;
    }

    Some(CoherenceForecast {
        values,
        window_mean,
        window_slope,
    })
}
