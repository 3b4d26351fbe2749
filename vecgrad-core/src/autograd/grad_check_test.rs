use super::{check_grad, GradCheckError};
use crate::autograd::backward_op::Op;
use crate::error::VecGradError;
use crate::graph::{Graph, Node, NodeId};

const EPSILON: f64 = 1e-6;
const TOLERANCE: f64 = 1e-5;

#[test]
fn test_check_grad_mul() {
    let func = |g: &mut Graph<f64>, x: &[NodeId]| g.mul(x[0], x[1]);
    check_grad(func, &[vec![1.0, -2.0, 3.0], vec![4.0, 5.0, -6.0]], EPSILON, TOLERANCE).unwrap();
}

#[test]
fn test_check_grad_div() {
    let func = |g: &mut Graph<f64>, x: &[NodeId]| g.div(x[0], x[1]);
    check_grad(func, &[vec![2.0, -2.0], vec![3.0, 0.5]], EPSILON, TOLERANCE).unwrap();
}

#[test]
fn test_check_grad_tanh_of_exp() {
    let func = |g: &mut Graph<f64>, x: &[NodeId]| {
        let e = g.exp(x[0])?;
        g.tanh(e)
    };
    check_grad(func, &[vec![-1.0, 0.0, 0.3]], EPSILON, TOLERANCE).unwrap();
}

#[test]
fn test_check_grad_concat_then_dot() {
    let func = |g: &mut Graph<f64>, x: &[NodeId]| {
        let c = g.concat(&[x[0], x[1]])?;
        g.dot(c, c)
    };
    check_grad(func, &[vec![0.5], vec![-1.5, 2.0]], EPSILON, TOLERANCE).unwrap();
}

#[test]
fn test_check_grad_reports_forward_errors() {
    let func = |g: &mut Graph<f64>, x: &[NodeId]| g.add(x[0], x[1]);
    let result = check_grad(func, &[vec![1.0], vec![1.0, 2.0]], EPSILON, TOLERANCE);
    assert!(matches!(
        result,
        Err(GradCheckError::ForwardPassError(VecGradError::ShapeMismatch { .. }))
    ));
}

#[test]
fn test_check_grad_detects_wrong_rule() {
    // A hand-built node that claims to be `a * 3` but computes `a * 2`.
    let func = |g: &mut Graph<f64>, x: &[NodeId]| {
        let data: Vec<f64> = g.data(x[0])?.iter().map(|v| v * 2.0).collect();
        Ok(g.push(Node::derived(data, vec![x[0]], Op::MulScalar(3.0))))
    };
    let result = check_grad(func, &[vec![1.0, 2.0]], EPSILON, TOLERANCE);
    match result {
        Err(GradCheckError::GradientMismatch {
            input_index,
            element_index,
            analytical_grad,
            numerical_grad,
            ..
        }) => {
            assert_eq!(input_index, 0);
            assert_eq!(element_index, 0);
            assert!((analytical_grad - 3.0).abs() < 1e-9);
            assert!((numerical_grad - 2.0).abs() < 1e-4);
        }
        other => panic!("expected GradientMismatch, got {:?}", other),
    }
}
