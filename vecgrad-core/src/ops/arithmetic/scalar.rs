use crate::autograd::backward_op::BackwardContext;
use crate::autograd::Op;
use crate::error::VecGradError;
use crate::graph::{Graph, NodeId};
use crate::ops::apply_unary_op;
use crate::scalar::Scalar;

/// `a + c` for a constant `c`.
pub fn add_scalar_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, c: T) -> Result<NodeId, VecGradError> {
    apply_unary_op(graph, a, |x| x + c, Op::AddScalar)
}

/// `a - c`, recorded as `a + (-c)`.
pub fn sub_scalar_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, c: T) -> Result<NodeId, VecGradError> {
    add_scalar_op(graph, a, -c)
}

/// `a * c` for a constant `c`.
pub fn mul_scalar_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, c: T) -> Result<NodeId, VecGradError> {
    apply_unary_op(graph, a, |x| x * c, Op::MulScalar(c))
}

/// `a / c`, recorded as `a * (1 / c)`. A zero `c` yields infinities.
pub fn div_scalar_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, c: T) -> Result<NodeId, VecGradError> {
    mul_scalar_op(graph, a, c.recip())
}

pub(crate) fn add_scalar_backward<T: Scalar>(ctx: &mut BackwardContext<'_, T>) {
    let out = ctx.output();
    for (i, &g) in out.grad().iter().enumerate() {
        ctx.accumulate(0, i, g);
    }
}

pub(crate) fn mul_scalar_backward<T: Scalar>(ctx: &mut BackwardContext<'_, T>, factor: T) {
    let out = ctx.output();
    for (i, &g) in out.grad().iter().enumerate() {
        ctx.accumulate(0, i, g * factor);
    }
}

#[cfg(test)]
#[path = "scalar_test.rs"]
mod tests;
