mod common;

use common::{init_logger, seeded_graph};
use vecgrad_core::{Graph, VecGradError};

#[test]
fn test_zeros_and_literals() {
    init_logger();
    let mut graph: Graph = Graph::new();
    let z = graph.zeros(4);
    assert_eq!(graph.data(z).unwrap(), vec![0.0; 4]);
    assert_eq!(graph.grad(z).unwrap(), vec![0.0; 4]);
    assert!(graph.parents(z).unwrap().is_empty());

    let l = graph.leaf(vec![1.5, -2.5]);
    assert_eq!(graph.size(l).unwrap(), 2);
    assert_eq!(graph.get(l, 1).unwrap(), -2.5);
}

#[test]
fn test_random_factories_respect_bounds() {
    let mut graph: Graph<f64> = seeded_graph(17);
    let u = graph.uniform(500, -0.5, 0.25).unwrap();
    assert!(graph
        .data(u)
        .unwrap()
        .iter()
        .all(|&v| (-0.5..0.25).contains(&v)));

    let n = graph.normal(500, 3.0, 0.0).unwrap();
    assert!(graph.data(n).unwrap().iter().all(|&v| v == 3.0));
}

#[test]
fn test_random_factory_errors() {
    let mut graph: Graph = Graph::new();
    assert!(matches!(
        graph.uniform(3, 1.0, -1.0),
        Err(VecGradError::InvalidDistribution(_))
    ));
    assert!(matches!(
        graph.uniform(3, f32::NEG_INFINITY, 0.0),
        Err(VecGradError::InvalidDistribution(_))
    ));
    assert!(matches!(
        graph.normal(3, 0.0, -1.0),
        Err(VecGradError::InvalidDistribution(_))
    ));
    assert!(graph.is_empty());
}

#[test]
fn test_seeded_graphs_reproduce() {
    let mut g1: Graph = seeded_graph(123);
    let mut g2: Graph = seeded_graph(123);
    let a1 = g1.uniform(16, -1.0, 1.0).unwrap();
    let a2 = g2.uniform(16, -1.0, 1.0).unwrap();
    let b1 = g1.normal(16, 0.0, 2.0).unwrap();
    let b2 = g2.normal(16, 0.0, 2.0).unwrap();
    assert_eq!(g1.data(a1).unwrap(), g2.data(a2).unwrap());
    assert_eq!(g1.data(b1).unwrap(), g2.data(b2).unwrap());
}
