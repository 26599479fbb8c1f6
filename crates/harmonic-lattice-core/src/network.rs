//! The oscillator network: node arena, connectivity, and the per-step update.
//!
//! The network is an explicitly owned, single-writer aggregate: it is created
//! once, mutated in place by repeated [`OscillatorNetwork::step`] calls from
//! exactly one driver, and discarded at process end. It never prints, sleeps,
//! or reads a clock; simulation time `t` is always an input.
//!
//! # Step semantics
//!
//! Each call to `step(t)`:
//!
//! 1. samples every node's instantaneous amplitude `cos(2π·f·t + θ)`
//!    (an observation, not a dynamics input);
//! 2. applies a synchronized Kuramoto coupling update: all phases are
//!    snapshotted, each node's delta `K · Σ_{j∈N(i)} sin(θⱼ − θᵢ)` is
//!    computed from the snapshot, then all deltas commit at once;
//! 3. measures the order parameter `R`, updates the coherence state
//!    (`tau_k = tau_base + 1.5·R`, `v_tau = R`), appends `R` to the history,
//!    and increments the step counter.
//!
//! Phases are never wrapped; they may grow without bound. Only sines and
//! cosines of phase differences are consumed, so this is numerically
//! harmless — use [`OscillatorNode::wrapped_phase`] before inspecting raw
//! values.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::coherence::{CoherenceSnapshot, TemporalCoherence, COHERENCE_GAIN};
use crate::config::NetworkConfig;
use crate::error::{LatticeError, LatticeResult};
use crate::lattice::generate_lattice;
use crate::node::{NodeId, OscillatorNode};

/// Upper bound accepted by [`OscillatorNetwork::apply_coherence_adjustment`].
///
/// The external text-ingestion collaborator produces at most
/// `min(1.0, concepts / 20) · 2.0`.
pub const MAX_COHERENCE_ADJUSTMENT: f64 = 2.0;

/// A spatially-distributed network of coupled phase oscillators.
#[derive(Debug, Clone)]
pub struct OscillatorNetwork {
    nodes: Vec<OscillatorNode>,
    dimension: usize,
    connection_radius: f64,
    coupling_strength: f64,
    coherence: TemporalCoherence,
    history: Vec<f64>,
    steps: u64,
}

impl OscillatorNetwork {
    /// Build a network: validate the configuration, generate the lattice,
    /// and derive connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::ConfigError`] for a zero node count, zero
    /// dimension, or non-positive radius/coupling/frequency. An invalid
    /// configuration never yields a degenerate network.
    pub fn new(config: &NetworkConfig) -> LatticeResult<Self> {
        config.validate().map_err(LatticeError::ConfigError)?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let nodes = generate_lattice(config, &mut rng)?;
        let mut network = Self {
            nodes,
            dimension: config.dimension,
            connection_radius: config.connection_radius,
            coupling_strength: config.coupling_strength,
            coherence: TemporalCoherence::with_base(config.base_tau_k),
            history: Vec::new(),
            steps: 0,
        };
        network.establish_connections();

        tracing::debug!(
            nodes = network.node_count(),
            edges = network.edge_count(),
            dimension = network.dimension,
            "oscillator network constructed"
        );

        Ok(network)
    }

    /// Connect every unordered pair closer than the connectivity radius.
    ///
    /// O(N²) pairwise scan; fine at the reference scale (N ≈ 100–200).
    /// Larger networks would want a spatial index with the same strict-`<`
    /// edge predicate.
    fn establish_connections(&mut self) {
        for i in 0..self.nodes.len() {
            for j in (i + 1)..self.nodes.len() {
                let distance = self.nodes[i].distance_to(&self.nodes[j]);
                if distance < self.connection_radius {
                    let (a, b) = (self.nodes[i].id(), self.nodes[j].id());
                    self.nodes[i].neighbors.push(b);
                    self.nodes[j].neighbors.push(a);
                }
            }
        }
    }

    /// Advance the network one step at simulation time `t` and return the
    /// measured order parameter.
    ///
    /// Callers choose the time spacing; `t` must simply advance
    /// monotonically across calls.
    pub fn step(&mut self, t: f64) -> f64 {
        for node in &mut self.nodes {
            let amplitude = node.oscillate(t);
            node.last_amplitude = amplitude;
        }

        // Synchronized coupling: all deltas are computed against the same
        // phase snapshot before any commit.
        let snapshot: Vec<f64> = self.nodes.iter().map(|n| n.phase).collect();
        let mut deltas = vec![0.0; self.nodes.len()];
        for (i, node) in self.nodes.iter().enumerate() {
            let mut coupling_sum = 0.0;
            for &neighbor in node.neighbors() {
                coupling_sum += (snapshot[neighbor.index()] - snapshot[i]).sin();
            }
            deltas[i] = self.coupling_strength * coupling_sum;
        }
        for (node, delta) in self.nodes.iter_mut().zip(deltas.iter()) {
            node.phase += delta;
        }

        let r = self.order_parameter();
        self.coherence.tau_k = self.coherence.tau_base + r * COHERENCE_GAIN;
        self.coherence.v_tau = r;
        self.history.push(r);
        self.steps += 1;

        r
    }

    /// Kuramoto order parameter `R = |mean over nodes of e^(iθ)|`.
    ///
    /// Always in `[0, 1]`: 0 is fully incoherent, 1 fully synchronized.
    pub fn order_parameter(&self) -> f64 {
        let n = self.nodes.len() as f64;
        let mut sum_cos = 0.0;
        let mut sum_sin = 0.0;
        for node in &self.nodes {
            sum_cos += node.phase.cos();
            sum_sin += node.phase.sin();
        }
        let avg_cos = sum_cos / n;
        let avg_sin = sum_sin / n;
        (avg_cos * avg_cos + avg_sin * avg_sin).sqrt()
    }

    /// Add an externally derived coherence adjustment to the tau base.
    ///
    /// Inbound boundary for the text-ingestion collaborator: the adjustment
    /// must be finite and in `[0, MAX_COHERENCE_ADJUSTMENT]`. It folds into
    /// `tau_base` so it persists across the per-step `tau_k` recomputation.
    pub fn apply_coherence_adjustment(&mut self, adjustment: f64) -> LatticeResult<()> {
        if !adjustment.is_finite() || adjustment < 0.0 || adjustment > MAX_COHERENCE_ADJUSTMENT {
            return Err(LatticeError::invalid_param(
                "adjustment",
                adjustment,
                format!(
                    "must be a finite value in [0, {}]",
                    MAX_COHERENCE_ADJUSTMENT
                ),
            ));
        }
        self.coherence.tau_base += adjustment;
        self.coherence.tau_k += adjustment;
        Ok(())
    }

    /// Overwrite a node's phase.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::NodeNotFound`] for an unknown id and
    /// [`LatticeError::PhaseError`] for a non-finite phase.
    pub fn set_phase(&mut self, id: NodeId, phase: f64) -> LatticeResult<()> {
        if !phase.is_finite() {
            return Err(LatticeError::PhaseError(format!(
                "phase must be finite, got {}",
                phase
            )));
        }
        let node = self
            .nodes
            .get_mut(id.index())
            .ok_or_else(|| LatticeError::NodeNotFound(id.to_string()))?;
        node.phase = phase;
        Ok(())
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&OscillatorNode> {
        self.nodes.get(id.index())
    }

    /// All nodes, in id order.
    #[inline]
    pub fn nodes(&self) -> &[OscillatorNode] {
        &self.nodes
    }

    /// Number of nodes. Fixed after construction.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.neighbors.len()).sum::<usize>() / 2
    }

    /// Whether two nodes are adjacent.
    pub fn is_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.node(a)
            .map(|node| node.neighbors.contains(&b))
            .unwrap_or(false)
    }

    /// Spatial dimension of node positions.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Distance threshold used during construction.
    #[inline]
    pub fn connection_radius(&self) -> f64 {
        self.connection_radius
    }

    /// Per-step coupling weight.
    #[inline]
    pub fn coupling_strength(&self) -> f64 {
        self.coupling_strength
    }

    /// Current global coherence state.
    #[inline]
    pub fn coherence(&self) -> &TemporalCoherence {
        &self.coherence
    }

    /// Immutable `{tau_k, v_tau}` view for the resonance analyzers.
    #[inline]
    pub fn coherence_snapshot(&self) -> CoherenceSnapshot {
        self.coherence.snapshot()
    }

    /// Order-parameter samples, one per step, append-only.
    #[inline]
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Number of completed steps.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }
}
