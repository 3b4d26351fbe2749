use crate::autograd::backward_op::BackwardContext;
use crate::autograd::Op;
use crate::error::VecGradError;
use crate::graph::{Graph, NodeId};
use crate::ops::apply_unary_op;
use crate::scalar::Scalar;

/// Elementwise `a ^ exponent` for a constant exponent.
///
/// Negative bases with a non-integer exponent give NaN, as `powf` does.
pub fn pow_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, exponent: T) -> Result<NodeId, VecGradError> {
    apply_unary_op(graph, a, |x| x.powf(exponent), Op::Pow(exponent))
}

/// `grad_a += grad * e * a^(e - 1)`
pub(crate) fn pow_backward<T: Scalar>(ctx: &mut BackwardContext<'_, T>, exponent: T) {
    let out = ctx.output();
    let lowered = exponent - T::one();
    for (i, &g) in out.grad().iter().enumerate() {
        let a = ctx.parent_data(0)[i];
        ctx.accumulate(0, i, g * exponent * a.powf(lowered));
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
