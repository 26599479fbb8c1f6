//! End-to-end simulation tests: lattice construction, connectivity
//! invariants, and repeated stepping.

use harmonic_lattice_core::{NetworkConfig, OscillatorNetwork};

fn reference_network() -> OscillatorNetwork {
    let config = NetworkConfig {
        size: 100,
        seed: Some(42),
        ..Default::default()
    };
    OscillatorNetwork::new(&config).expect("reference config must be valid")
}

#[test]
fn full_simulation_run() {
    let mut network = reference_network();
    assert_eq!(network.node_count(), 100);

    let steps = 120;
    let dt = 0.01;
    for i in 0..steps {
        let r = network.step(i as f64 * dt);
        assert!((0.0..=1.0).contains(&r), "step {}: R = {} out of range", i, r);
    }

    assert_eq!(network.history().len(), steps);
    assert_eq!(network.steps(), steps as u64);

    let last = *network.history().last().unwrap();
    assert!((network.coherence().v_tau() - last).abs() < f64::EPSILON);
    assert!(
        (network.coherence().tau_k() - (network.coherence().tau_base() + 1.5 * last)).abs()
            < 1e-12
    );
}

#[test]
fn adjacency_invariants_hold_at_scale() {
    let network = reference_network();

    for node in network.nodes() {
        for &neighbor in node.neighbors() {
            assert_ne!(neighbor, node.id(), "self edge on {}", node.id());
            let back = network
                .node(neighbor)
                .unwrap_or_else(|| panic!("{} references missing {}", node.id(), neighbor));
            assert!(
                back.neighbors().contains(&node.id()),
                "edge {} -> {} not mirrored",
                node.id(),
                neighbor
            );
        }
    }
}

#[test]
fn spiral_lattice_density_decreases_outward() {
    // Golden-spiral spacing grows with the index, so early nodes carry more
    // neighbors than the outermost ones on average.
    let network = reference_network();
    let n = network.node_count();

    let inner: f64 = network.nodes()[..n / 4]
        .iter()
        .map(|node| node.degree() as f64)
        .sum::<f64>()
        / (n / 4) as f64;
    let outer: f64 = network.nodes()[3 * n / 4..]
        .iter()
        .map(|node| node.degree() as f64)
        .sum::<f64>()
        / (n - 3 * n / 4) as f64;

    assert!(
        inner > outer,
        "expected denser core: inner mean degree {}, outer {}",
        inner,
        outer
    );
}

#[test]
fn same_seed_reproduces_trajectory() {
    let config = NetworkConfig {
        size: 60,
        dimension: 3,
        seed: Some(7),
        ..Default::default()
    };
    let mut a = OscillatorNetwork::new(&config).unwrap();
    let mut b = OscillatorNetwork::new(&config).unwrap();

    for i in 0..50 {
        let t = i as f64 * 0.01;
        assert_eq!(a.step(t), b.step(t), "trajectories diverged at step {}", i);
    }
}

#[test]
fn different_seeds_differ() {
    let base = NetworkConfig {
        size: 60,
        dimension: 3,
        ..Default::default()
    };
    let a = OscillatorNetwork::new(&NetworkConfig {
        seed: Some(1),
        ..base.clone()
    })
    .unwrap();
    let b = OscillatorNetwork::new(&NetworkConfig {
        seed: Some(2),
        ..base
    })
    .unwrap();

    let positions_differ = a
        .nodes()
        .iter()
        .zip(b.nodes().iter())
        .any(|(na, nb)| na.position() != nb.position());
    assert!(positions_differ, "different seeds produced identical lattices");
}

#[test]
fn manuscript_adjustment_feeds_simulation() {
    let mut network = reference_network();
    let untouched_base = network.coherence().tau_base();

    // External collaborator contract: a bounded non-negative scalar.
    network
        .apply_coherence_adjustment(0.85)
        .expect("in-range adjustment must be accepted");

    let r = network.step(0.0);
    let expected_tau = untouched_base + 0.85 + 1.5 * r;
    assert!((network.coherence().tau_k() - expected_tau).abs() < 1e-12);
}

#[test]
fn isolated_nodes_are_valid() {
    // A tiny radius disconnects the lattice entirely; the network must
    // still construct and step.
    let config = NetworkConfig {
        size: 20,
        connection_radius: 1e-6,
        seed: Some(3),
        ..Default::default()
    };
    let mut network = OscillatorNetwork::new(&config).unwrap();
    assert_eq!(network.edge_count(), 0);

    let r = network.step(0.0);
    assert!((0.0..=1.0).contains(&r));
}
