//! # Operators (`ops`)
//!
//! Every operator lives in its own file as a free `xxx_op` function that
//! validates its inputs, computes the forward value eagerly and pushes the
//! result node together with its [`Op`](crate::autograd::Op) tag. The same
//! operators are exposed as methods on [`Graph`](crate::Graph).
//!
//! Primitive operators own a backward rule (`xxx_backward`), called by the
//! backward driver through [`Op`](crate::autograd::Op). Composite operators
//! (`sub`, `div`, `neg`, `dot`, scalar `sub`/`div`) only chain primitives.
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow and the scalar variants.
//! - [`math_elem`]: exp, tanh.
//! - [`reduction`]: sum, dot.
//! - [`concat`]: concatenation of several nodes.

use crate::autograd::Op;
use crate::error::VecGradError;
use crate::graph::{Graph, Node, NodeId};
use crate::scalar::Scalar;

pub mod arithmetic;
pub mod concat;
pub mod math_elem;
pub mod reduction;

pub use arithmetic::{
    add_op, add_scalar_op, div_op, div_scalar_op, mul_op, mul_scalar_op, neg_op, pow_op, sub_op,
    sub_scalar_op,
};
pub use concat::concat_op;
pub use math_elem::{exp_op, tanh_op};
pub use reduction::{dot_op, sum_op};

/// Applies `f` to every element of `a` and records `op` on the result.
pub(crate) fn apply_unary_op<T, F>(
    graph: &mut Graph<T>,
    a: NodeId,
    f: F,
    op: Op<T>,
) -> Result<NodeId, VecGradError>
where
    T: Scalar,
    F: Fn(T) -> T,
{
    let data: Vec<T> = graph.node(a)?.data().iter().map(|&x| f(x)).collect();
    Ok(graph.push(Node::derived(data, vec![a], op)))
}

/// Applies `f` pairwise to two nodes of equal size.
///
/// # Errors
/// `ShapeMismatch` (reported as `op_name`) when the sizes differ.
pub(crate) fn apply_binary_op<T, F>(
    graph: &mut Graph<T>,
    a: NodeId,
    b: NodeId,
    f: F,
    op: Op<T>,
    op_name: &str,
) -> Result<NodeId, VecGradError>
where
    T: Scalar,
    F: Fn(T, T) -> T,
{
    let a_data = graph.node(a)?.data();
    let b_data = graph.node(b)?.data();
    if a_data.len() != b_data.len() {
        return Err(VecGradError::shape_mismatch(
            a_data.len(),
            b_data.len(),
            op_name,
        ));
    }
    let data: Vec<T> = a_data
        .iter()
        .zip(b_data)
        .map(|(&x, &y)| f(x, y))
        .collect();
    Ok(graph.push(Node::derived(data, vec![a, b], op)))
}
