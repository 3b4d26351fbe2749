use crate::autograd::backward_op::BackwardContext;
use crate::autograd::Op;
use crate::error::VecGradError;
use crate::graph::{Graph, Node, NodeId};
use crate::scalar::Scalar;

/// Sums every element of `a` into a single-element node.
///
/// The sum of an empty node is `[0]`.
pub fn sum_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId) -> Result<NodeId, VecGradError> {
    let total = graph
        .node(a)?
        .data()
        .iter()
        .fold(T::zero(), |acc, &x| acc + x);
    Ok(graph.push(Node::derived(vec![total], vec![a], Op::Sum)))
}

/// Broadcasts the single output gradient onto every input element.
pub(crate) fn sum_backward<T: Scalar>(ctx: &mut BackwardContext<'_, T>) {
    let g = ctx.output().grad()[0];
    let size = ctx.parent_data(0).len();
    for i in 0..size {
        ctx.accumulate(0, i, g);
    }
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
