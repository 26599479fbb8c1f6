//! Lattice generation.
//!
//! Two distinct code paths, selected purely by dimension:
//!
//! - **D = 2**: deterministic golden-spiral layout. For index i,
//!   `θ = 2π·i / φ²` and `r = √i · φ`, giving non-uniform, increasingly
//!   sparse spacing with growing i.
//! - **D ≠ 2**: each coordinate is a standard normal draw scaled by the same
//!   radius formula. This is stochastic, not a generalization of the spiral.
//!
//! Initial phases are uniform in `[0, 2π)`; the local coherence parameter is
//! the base coefficient plus Gaussian noise. All draws come from the caller's
//! seeded RNG so lattices are reproducible.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::{Distribution, Normal, StandardNormal};

use crate::config::NetworkConfig;
use crate::error::{LatticeError, LatticeResult};
use crate::node::{NodeId, OscillatorNode};
use crate::GOLDEN_RATIO;

/// Generate `config.size` nodes with positions and initial phases.
///
/// Postcondition: exactly `size` nodes with unique ordinal ids, no
/// connectivity yet (the network builds adjacency afterwards).
pub fn generate_lattice(
    config: &NetworkConfig,
    rng: &mut StdRng,
) -> LatticeResult<Vec<OscillatorNode>> {
    let tau_noise = Normal::new(0.0, config.tau_noise_sigma).map_err(|e| {
        LatticeError::invalid_param("tau_noise_sigma", config.tau_noise_sigma, e.to_string())
    })?;

    let mut nodes = Vec::with_capacity(config.size);
    for i in 0..config.size {
        let radius = (i as f64).sqrt() * GOLDEN_RATIO;
        let position = if config.dimension == 2 {
            let theta = TAU * i as f64 / (GOLDEN_RATIO * GOLDEN_RATIO);
            vec![radius * theta.cos(), radius * theta.sin()]
        } else {
            (0..config.dimension)
                .map(|_| {
                    let z: f64 = StandardNormal.sample(rng);
                    z * radius
                })
                .collect()
        };

        let phase = rng.gen_range(0.0..TAU);
        let local_tau_k = config.base_tau_k + tau_noise.sample(rng);

        nodes.push(OscillatorNode::new(
            NodeId::new(i),
            position,
            config.base_frequency_hz,
            phase,
            local_tau_k,
        ));
    }

    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn config_with(size: usize, dimension: usize) -> NetworkConfig {
        NetworkConfig {
            size,
            dimension,
            seed: Some(42),
            ..Default::default()
        }
    }

    #[test]
    fn test_exact_count_and_unique_ids() {
        let mut rng = StdRng::seed_from_u64(42);
        let nodes = generate_lattice(&config_with(4, 2), &mut rng).unwrap();

        assert_eq!(nodes.len(), 4);
        for (i, node) in nodes.iter().enumerate() {
            assert_eq!(node.id().index(), i);
            assert_eq!(node.position().len(), 2);
        }
    }

    #[test]
    fn test_spiral_positions_match_formula() {
        let mut rng = StdRng::seed_from_u64(1);
        let nodes = generate_lattice(&config_with(5, 2), &mut rng).unwrap();

        for (i, node) in nodes.iter().enumerate() {
            let theta = TAU * i as f64 / (GOLDEN_RATIO * GOLDEN_RATIO);
            let radius = (i as f64).sqrt() * GOLDEN_RATIO;
            assert!((node.position()[0] - radius * theta.cos()).abs() < 1e-12);
            assert!((node.position()[1] - radius * theta.sin()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_first_spiral_node_at_origin() {
        let mut rng = StdRng::seed_from_u64(9);
        let nodes = generate_lattice(&config_with(1, 2), &mut rng).unwrap();
        assert!(nodes[0].position()[0].abs() < 1e-12);
        assert!(nodes[0].position()[1].abs() < 1e-12);
    }

    #[test]
    fn test_initial_phases_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let nodes = generate_lattice(&config_with(50, 2), &mut rng).unwrap();
        for node in &nodes {
            assert!((0.0..TAU).contains(&node.phase()));
        }
    }

    #[test]
    fn test_higher_dimension_positions() {
        let mut rng = StdRng::seed_from_u64(3);
        let nodes = generate_lattice(&config_with(10, 4), &mut rng).unwrap();

        for node in &nodes {
            assert_eq!(node.position().len(), 4);
        }
        // Node 0 has radius 0, so every coordinate collapses to the origin.
        assert!(nodes[0].position().iter().all(|c| c.abs() < 1e-12));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = config_with(20, 3);

        let mut rng_a = StdRng::seed_from_u64(123);
        let mut rng_b = StdRng::seed_from_u64(123);
        let a = generate_lattice(&config, &mut rng_a).unwrap();
        let b = generate_lattice(&config, &mut rng_b).unwrap();

        for (na, nb) in a.iter().zip(b.iter()) {
            assert_eq!(na.position(), nb.position());
            assert_eq!(na.phase(), nb.phase());
            assert_eq!(na.local_tau_k(), nb.local_tau_k());
        }
    }

    #[test]
    fn test_local_tau_k_centered_on_base() {
        let mut rng = StdRng::seed_from_u64(11);
        let config = config_with(500, 2);
        let nodes = generate_lattice(&config, &mut rng).unwrap();

        let mean: f64 =
            nodes.iter().map(|n| n.local_tau_k()).sum::<f64>() / nodes.len() as f64;
        // sigma = 0.3 over 500 draws: the sample mean stays close to 7.5
        assert!(
            (mean - config.base_tau_k).abs() < 0.1,
            "sample mean {} too far from base {}",
            mean,
            config.base_tau_k
        );
    }
}
