//! A single oscillator node.
//!
//! Nodes live in an arena owned by the network; a [`NodeId`] is the node's
//! stable ordinal index. The phase is deliberately never wrapped by the
//! dynamics (only sines and cosines of phase differences are consumed);
//! [`OscillatorNode::wrapped_phase`] is the normalization surface for
//! inspection or serialization.

use std::f64::consts::TAU;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a node within one network instance.
///
/// Ordinal-derived: the node created i-th has id `node_<i>` and lives at
/// arena index `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    /// Create an id from an arena index.
    #[inline]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Arena index of this node.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node_{}", self.0)
    }
}

/// A point oscillator with position, phase, and natural frequency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OscillatorNode {
    pub(crate) id: NodeId,
    pub(crate) position: Vec<f64>,
    pub(crate) natural_frequency_hz: f64,
    pub(crate) phase: f64,
    pub(crate) neighbors: Vec<NodeId>,
    pub(crate) last_amplitude: f64,
    pub(crate) local_tau_k: f64,
}

impl OscillatorNode {
    pub(crate) fn new(
        id: NodeId,
        position: Vec<f64>,
        natural_frequency_hz: f64,
        phase: f64,
        local_tau_k: f64,
    ) -> Self {
        Self {
            id,
            position,
            natural_frequency_hz,
            phase,
            neighbors: Vec::new(),
            last_amplitude: 0.0,
            local_tau_k,
        }
    }

    /// Node identifier.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Spatial position (length = network dimension).
    #[inline]
    pub fn position(&self) -> &[f64] {
        &self.position
    }

    /// Natural oscillation frequency in Hz.
    #[inline]
    pub fn natural_frequency_hz(&self) -> f64 {
        self.natural_frequency_hz
    }

    /// Raw phase. Grows unbounded across steps; see [`Self::wrapped_phase`]
    /// for a normalized value.
    #[inline]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Phase normalized into `[0, 2π)`.
    #[inline]
    pub fn wrapped_phase(&self) -> f64 {
        self.phase.rem_euclid(TAU)
    }

    /// Ids of adjacent nodes. Symmetric by construction.
    #[inline]
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    /// Number of adjacent nodes.
    #[inline]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Amplitude sampled at the most recent step. An observation only; it
    /// does not feed back into the phase dynamics.
    #[inline]
    pub fn last_amplitude(&self) -> f64 {
        self.last_amplitude
    }

    /// Local coherence parameter drawn once at creation (base coefficient
    /// plus Gaussian noise). Not consumed by the coupling update.
    #[inline]
    pub fn local_tau_k(&self) -> f64 {
        self.local_tau_k
    }

    /// Instantaneous amplitude `cos(2π·f·t + phase)` at time `t`.
    #[inline]
    pub fn oscillate(&self, t: f64) -> f64 {
        (TAU * self.natural_frequency_hz * t + self.phase).cos()
    }

    /// Euclidean distance to another node.
    pub(crate) fn distance_to(&self, other: &OscillatorNode) -> f64 {
        self.position
            .iter()
            .zip(other.position.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }
}
