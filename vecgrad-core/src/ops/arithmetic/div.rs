use super::mul::mul_op;
use super::pow::pow_op;
use crate::error::VecGradError;
use crate::graph::{Graph, NodeId};
use crate::scalar::Scalar;

/// Elementwise `a / b`, built as `a * b^-1`.
///
/// Zero denominators are not rejected; the results follow IEEE-754
/// (infinite or NaN values in both data and gradients).
pub fn div_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, b: NodeId) -> Result<NodeId, VecGradError> {
    let a_size = graph.size(a)?;
    let b_size = graph.size(b)?;
    if a_size != b_size {
        return Err(VecGradError::shape_mismatch(a_size, b_size, "div"));
    }
    let inv_b = pow_op(graph, b, -T::one())?;
    mul_op(graph, a, inv_b)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
