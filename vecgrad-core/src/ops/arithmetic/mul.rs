use crate::autograd::backward_op::BackwardContext;
use crate::autograd::Op;
use crate::error::VecGradError;
use crate::graph::{Graph, NodeId};
use crate::ops::apply_binary_op;
use crate::scalar::Scalar;

/// Elementwise `a * b`.
pub fn mul_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, b: NodeId) -> Result<NodeId, VecGradError> {
    apply_binary_op(graph, a, b, |x, y| x * y, Op::Mul, "mul")
}

/// `grad_a += grad * b`, `grad_b += grad * a`.
///
/// Both operand values are read before either accumulation, so `mul(a, a)`
/// picks up `2 * a * grad`.
pub(crate) fn mul_backward<T: Scalar>(ctx: &mut BackwardContext<'_, T>) {
    let out = ctx.output();
    for (i, &g) in out.grad().iter().enumerate() {
        let a = ctx.parent_data(0)[i];
        let b = ctx.parent_data(1)[i];
        ctx.accumulate(0, i, g * b);
        ctx.accumulate(1, i, g * a);
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
