use super::dot_op;
use crate::autograd::grad_check::check_grad;
use crate::error::VecGradError;
use crate::graph::{Graph, NodeId};
use crate::utils::testing::{check_data_near, check_grad_near};

#[test]
fn test_dot_forward_backward() {
    let mut graph: Graph = Graph::new();
    let a = graph.leaf(vec![1.0, 2.0]);
    let b = graph.leaf(vec![3.0, 4.0]);
    let d = dot_op(&mut graph, a, b).unwrap();
    check_data_near(&graph, d, &[11.0], 1e-6);

    graph.backward(d).unwrap();
    check_grad_near(&graph, a, &[3.0, 4.0], 1e-6);
    check_grad_near(&graph, b, &[1.0, 2.0], 1e-6);
}

#[test]
fn test_dot_with_itself() {
    let mut graph: Graph = Graph::new();
    let a = graph.leaf(vec![1.0, -3.0]);
    let d = dot_op(&mut graph, a, a).unwrap();
    graph.backward(d).unwrap();
    check_data_near(&graph, d, &[10.0], 1e-6);
    check_grad_near(&graph, a, &[2.0, -6.0], 1e-6);
}

#[test]
fn test_dot_size_mismatch() {
    let mut graph: Graph = Graph::new();
    let a = graph.leaf(vec![1.0, 2.0]);
    let b = graph.leaf(vec![1.0, 2.0, 3.0]);
    assert_eq!(
        dot_op(&mut graph, a, b),
        Err(VecGradError::shape_mismatch(2, 3, "dot"))
    );
}

#[test]
fn test_dot_grad_check() {
    let func = |g: &mut Graph<f64>, x: &[NodeId]| dot_op(g, x[0], x[1]);
    check_grad(func, &[vec![0.2, -0.4, 1.1], vec![-1.0, 0.5, 2.0]], 1e-6, 1e-6).unwrap();
}
