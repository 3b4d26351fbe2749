use super::sum::sum_op;
use crate::error::VecGradError;
use crate::graph::{Graph, NodeId};
use crate::ops::arithmetic::mul_op;
use crate::scalar::Scalar;

/// Inner product `[sum_i a_i * b_i]`, built as `sum(a * b)`.
///
/// # Errors
/// `ShapeMismatch` (reported as `dot`) if the sizes differ.
pub fn dot_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, b: NodeId) -> Result<NodeId, VecGradError> {
    let a_size = graph.size(a)?;
    let b_size = graph.size(b)?;
    if a_size != b_size {
        return Err(VecGradError::shape_mismatch(a_size, b_size, "dot"));
    }
    let product = mul_op(graph, a, b)?;
    sum_op(graph, product)
}

#[cfg(test)]
#[path = "dot_test.rs"]
mod tests;
