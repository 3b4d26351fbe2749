use crate::autograd::backward_op::BackwardContext;
use crate::autograd::Op;
use crate::error::VecGradError;
use crate::graph::{Graph, NodeId};
use crate::ops::apply_unary_op;
use crate::scalar::Scalar;

/// Elementwise `e^a`. Overflow yields infinity.
pub fn exp_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId) -> Result<NodeId, VecGradError> {
    apply_unary_op(graph, a, T::exp, Op::Exp)
}

/// `grad_a += grad * e^a`, reusing the forward output.
pub(crate) fn exp_backward<T: Scalar>(ctx: &mut BackwardContext<'_, T>) {
    let out = ctx.output();
    for (i, (&g, &y)) in out.grad().iter().zip(out.data()).enumerate() {
        ctx.accumulate(0, i, g * y);
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
