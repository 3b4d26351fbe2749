use super::sum_op;
use crate::graph::Graph;
use crate::utils::testing::{check_data_near, check_grad_near};

#[test]
fn test_sum_forward_backward() {
    let mut graph: Graph = Graph::new();
    let a = graph.leaf(vec![1.0, 2.0, 3.5]);
    let s = sum_op(&mut graph, a).unwrap();
    assert_eq!(graph.size(s).unwrap(), 1);
    check_data_near(&graph, s, &[6.5], 1e-6);

    graph.backward(s).unwrap();
    check_grad_near(&graph, a, &[1.0, 1.0, 1.0], 1e-6);
}

#[test]
fn test_sum_of_empty_node() {
    let mut graph: Graph = Graph::new();
    let a = graph.leaf(vec![]);
    let s = sum_op(&mut graph, a).unwrap();
    check_data_near(&graph, s, &[0.0], 1e-6);
    graph.backward(s).unwrap();
    assert!(graph.grad(a).unwrap().is_empty());
}

#[test]
fn test_sum_scales_incoming_grad() {
    let mut graph: Graph = Graph::new();
    let a = graph.leaf(vec![1.0, -1.0]);
    let s = sum_op(&mut graph, a).unwrap();
    let scaled = graph.mul_scalar(s, 4.0).unwrap();
    graph.backward(scaled).unwrap();
    check_grad_near(&graph, a, &[4.0, 4.0], 1e-6);
}
