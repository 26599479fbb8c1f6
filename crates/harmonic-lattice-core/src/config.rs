//! Network construction parameters.
//!
//! All constants default to the reference system values: 936 Hz base
//! frequency, connectivity radius 5.0, coupling strength 0.05, and a base
//! temporal-coherence coefficient of 7.5.

use serde::{Deserialize, Serialize};

/// Configuration for building an [`OscillatorNetwork`](crate::OscillatorNetwork).
///
/// # Example
///
/// ```
/// use harmonic_lattice_core::NetworkConfig;
///
/// let config = NetworkConfig {
///     size: 200,
///     seed: Some(42),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Number of oscillator nodes. Must be > 0.
    pub size: usize,

    /// Spatial dimension of node positions. Must be > 0.
    ///
    /// Dimension 2 uses the deterministic golden-spiral layout; any other
    /// dimension uses per-coordinate normal draws (a distinct stochastic
    /// path, see [`lattice`](crate::lattice)).
    pub dimension: usize,

    /// Distance threshold below which two nodes are connected (strict `<`).
    pub connection_radius: f64,

    /// Per-step weight of the Kuramoto phase-nudging update.
    pub coupling_strength: f64,

    /// Natural oscillation frequency shared by all nodes (Hz).
    pub base_frequency_hz: f64,

    /// Base temporal-coherence coefficient (tau_k before any order-parameter
    /// contribution or external adjustment).
    pub base_tau_k: f64,

    /// Standard deviation of the Gaussian noise added to each node's local
    /// coherence parameter at creation.
    pub tau_noise_sigma: f64,

    /// Seed for the network's random source. `None` seeds from entropy;
    /// set this for reproducible lattices and analyzer outputs.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            size: 100,
            dimension: 2,
            connection_radius: 5.0,
            coupling_strength: 0.05,
            base_frequency_hz: 936.0,
            base_tau_k: 7.5,
            tau_noise_sigma: 0.3,
            seed: None,
        }
    }
}

impl NetworkConfig {
    /// Validate the configuration.
    ///
    /// The network constructor calls this and fails fast; an invalid
    /// configuration never produces a degenerate (empty) network.
    pub fn validate(&self) -> Result<(), String> {
        if self.size == 0 {
            return Err(format!("size must be > 0, got {}", self.size));
        }
        if self.dimension == 0 {
            return Err(format!("dimension must be > 0, got {}", self.dimension));
        }
        if !self.connection_radius.is_finite() || self.connection_radius <= 0.0 {
            return Err(format!(
                "connection_radius must be a positive finite value, got {}",
                self.connection_radius
            ));
        }
        if !self.coupling_strength.is_finite() || self.coupling_strength <= 0.0 {
            return Err(format!(
                "coupling_strength must be a positive finite value, got {}",
                self.coupling_strength
            ));
        }
        if !self.base_frequency_hz.is_finite() || self.base_frequency_hz <= 0.0 {
            return Err(format!(
                "base_frequency_hz must be a positive finite value, got {}",
                self.base_frequency_hz
            ));
        }
        if !self.base_tau_k.is_finite() || self.base_tau_k <= 0.0 {
            return Err(format!(
                "base_tau_k must be a positive finite value, got {}",
                self.base_tau_k
            ));
        }
        if !self.tau_noise_sigma.is_finite() || self.tau_noise_sigma < 0.0 {
            return Err(format!(
                "tau_noise_sigma must be a non-negative finite value, got {}",
                self.tau_noise_sigma
            ));
        }
        Ok(())
    }
}
