use crate::autograd::backward_op::BackwardContext;
use crate::autograd::Op;
use crate::error::VecGradError;
use crate::graph::{Graph, NodeId};
use crate::ops::apply_unary_op;
use crate::scalar::Scalar;

/// Elementwise hyperbolic tangent.
pub fn tanh_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId) -> Result<NodeId, VecGradError> {
    apply_unary_op(graph, a, T::tanh, Op::Tanh)
}

/// `grad_a += grad * (1 - tanh(a)^2)`, reusing the forward output.
pub(crate) fn tanh_backward<T: Scalar>(ctx: &mut BackwardContext<'_, T>) {
    let out = ctx.output();
    for (i, (&g, &y)) in out.grad().iter().zip(out.data()).enumerate() {
        ctx.accumulate(0, i, g * (T::one() - y * y));
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
