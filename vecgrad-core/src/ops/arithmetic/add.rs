use crate::autograd::backward_op::BackwardContext;
use crate::autograd::Op;
use crate::error::VecGradError;
use crate::graph::{Graph, NodeId};
use crate::ops::apply_binary_op;
use crate::scalar::Scalar;

/// Elementwise `a + b`.
///
/// # Errors
/// `ShapeMismatch` if the sizes differ, `InvalidNode` for stale handles.
pub fn add_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, b: NodeId) -> Result<NodeId, VecGradError> {
    apply_binary_op(graph, a, b, |x, y| x + y, Op::Add, "add")
}

/// Both operands receive the output gradient unchanged.
pub(crate) fn add_backward<T: Scalar>(ctx: &mut BackwardContext<'_, T>) {
    let out = ctx.output();
    for (i, &g) in out.grad().iter().enumerate() {
        ctx.accumulate(0, i, g);
        ctx.accumulate(1, i, g);
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
