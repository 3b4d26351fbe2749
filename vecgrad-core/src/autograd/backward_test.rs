use crate::error::VecGradError;
use crate::graph::Graph;
use crate::utils::testing::{check_data_near, check_grad_near};
use approx::assert_relative_eq;

#[test]
fn test_backward_add_scalars() {
    let mut graph: Graph = Graph::new();
    let a = graph.leaf(vec![2.0]);
    let b = graph.leaf(vec![-3.0]);
    let c = graph.add(a, b).unwrap();
    check_data_near(&graph, c, &[-1.0], 1e-6);
    graph.backward(c).unwrap();
    check_grad_near(&graph, a, &[1.0], 1e-6);
    check_grad_near(&graph, b, &[1.0], 1e-6);
}

#[test]
fn test_backward_mul_scalars() {
    let mut graph: Graph = Graph::new();
    let a = graph.leaf(vec![2.0]);
    let b = graph.leaf(vec![-3.0]);
    let c = graph.mul(a, b).unwrap();
    check_data_near(&graph, c, &[-6.0], 1e-6);
    graph.backward(c).unwrap();
    check_grad_near(&graph, a, &[-3.0], 1e-6);
    check_grad_near(&graph, b, &[2.0], 1e-6);
}

#[test]
fn test_backward_dot() {
    let mut graph: Graph = Graph::new();
    let a = graph.leaf(vec![1.0, 1.0]);
    let b = graph.leaf(vec![2.0, 3.0]);
    let c = graph.dot(a, b).unwrap();
    check_data_near(&graph, c, &[5.0], 1e-6);
    graph.backward(c).unwrap();
    check_grad_near(&graph, a, &[2.0, 3.0], 1e-6);
    check_grad_near(&graph, b, &[1.0, 1.0], 1e-6);
}

#[test]
fn test_backward_div() {
    let mut graph: Graph = Graph::new();
    let a = graph.leaf(vec![2.0]);
    let b = graph.leaf(vec![3.0]);
    let c = graph.div(a, b).unwrap();
    graph.backward(c).unwrap();
    check_grad_near(&graph, a, &[1.0 / 3.0], 1e-5);
    check_grad_near(&graph, b, &[-2.0 / 9.0], 1e-5);
}

#[test]
fn test_backward_concat_routes_slices() {
    let mut graph: Graph = Graph::new();
    let a = graph.leaf(vec![1.0]);
    let b = graph.leaf(vec![2.0, 3.0]);
    let r = graph.concat(&[a, b]).unwrap();
    check_data_near(&graph, r, &[1.0, 2.0, 3.0], 1e-6);
    graph.backward(r).unwrap();
    check_grad_near(&graph, a, &[1.0], 1e-6);
    check_grad_near(&graph, b, &[1.0, 1.0], 1e-6);
}

#[test]
fn test_backward_seeds_every_root_element() {
    let mut graph: Graph = Graph::new();
    let a = graph.leaf(vec![1.0, 2.0, 3.0]);
    let r = graph.mul_scalar(a, 2.0).unwrap();
    graph.backward(r).unwrap();
    check_grad_near(&graph, r, &[1.0, 1.0, 1.0], 1e-6);
    check_grad_near(&graph, a, &[2.0, 2.0, 2.0], 1e-6);
}

#[test]
fn test_backward_leaf_root() {
    let mut graph: Graph = Graph::new();
    let a = graph.leaf(vec![4.0, 5.0]);
    graph.backward(a).unwrap();
    check_grad_near(&graph, a, &[1.0, 1.0], 1e-6);
}

#[test]
fn test_backward_accumulates_leaf_grads() {
    let mut graph: Graph = Graph::new();
    let a = graph.leaf(vec![2.0]);
    let b = graph.leaf(vec![-3.0]);
    let c = graph.mul(a, b).unwrap();
    graph.backward(c).unwrap();
    graph.backward(c).unwrap();
    check_grad_near(&graph, a, &[-6.0], 1e-6);
    check_grad_near(&graph, b, &[4.0], 1e-6);
    // Intermediate grads describe the latest pass only.
    check_grad_near(&graph, c, &[1.0], 1e-6);

    graph.clear_grad(a).unwrap();
    graph.clear_grad(b).unwrap();
    graph.backward(c).unwrap();
    check_grad_near(&graph, a, &[-3.0], 1e-6);
    check_grad_near(&graph, b, &[2.0], 1e-6);
}

#[test]
fn test_backward_diamond() {
    // r = exp(x) * tanh(x); dr/dx = exp(x) * tanh(x) + exp(x) * (1 - tanh(x)^2)
    let mut graph: Graph<f64> = Graph::new();
    let x = graph.leaf(vec![0.7]);
    let y = graph.exp(x).unwrap();
    let z = graph.tanh(x).unwrap();
    let r = graph.mul(y, z).unwrap();
    graph.backward(r).unwrap();

    let e = 0.7f64.exp();
    let t = 0.7f64.tanh();
    let expected = e * t + e * (1.0 - t * t);
    assert_relative_eq!(graph.grad(x).unwrap()[0], expected, epsilon = 1e-12);
}

#[test]
fn test_backward_shared_intermediate() {
    // h is consumed twice; x receives both contributions.
    let mut graph: Graph = Graph::new();
    let x = graph.leaf(vec![1.0, 2.0]);
    let h = graph.mul_scalar(x, 3.0).unwrap();
    let p = graph.add(h, h).unwrap();
    let q = graph.mul(p, h).unwrap();
    graph.backward(q).unwrap();
    // q = 2h^2 = 18x^2, dq/dx = 36x
    check_grad_near(&graph, x, &[36.0, 72.0], 1e-4);
}

#[test]
fn test_backward_separate_roots_share_nothing() {
    let mut graph: Graph = Graph::new();
    let a = graph.leaf(vec![1.0]);
    let h = graph.mul_scalar(a, 2.0).unwrap();
    let l1 = graph.mul_scalar(h, 3.0).unwrap();
    let l2 = graph.mul_scalar(h, 5.0).unwrap();
    graph.backward(l1).unwrap();
    graph.backward(l2).unwrap();
    // h's own grad is recomputed for the second pass.
    check_grad_near(&graph, h, &[5.0], 1e-6);
    check_grad_near(&graph, a, &[16.0], 1e-6);
}

#[test]
fn test_backward_leaves_unreachable_nodes_alone() {
    let mut graph: Graph = Graph::new();
    let a = graph.leaf(vec![1.0]);
    let other = graph.leaf(vec![2.0]);
    let _unused = graph.mul(a, other).unwrap();
    let r = graph.exp(a).unwrap();
    graph.backward(r).unwrap();
    check_grad_near(&graph, other, &[0.0], 1e-6);
}

#[test]
fn test_backward_stale_root() {
    let mut graph: Graph = Graph::new();
    let a = graph.leaf(vec![1.0]);
    let checkpoint = graph.checkpoint();
    let r = graph.exp(a).unwrap();
    graph.truncate(checkpoint);
    assert!(matches!(
        graph.backward(r),
        Err(VecGradError::InvalidNode { .. })
    ));
    check_grad_near(&graph, a, &[0.0], 1e-6);
}

#[test]
fn test_backward_long_chain() {
    let mut graph: Graph = Graph::new();
    let x = graph.leaf(vec![1.0]);
    let mut acc = graph.zeros(1);
    for _ in 0..20_000 {
        acc = graph.add(acc, x).unwrap();
    }
    graph.backward(acc).unwrap();
    check_grad_near(&graph, x, &[20_000.0], 1e-3);
}
