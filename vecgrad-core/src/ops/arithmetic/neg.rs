use super::scalar::mul_scalar_op;
use crate::error::VecGradError;
use crate::graph::{Graph, NodeId};
use crate::scalar::Scalar;

/// Elementwise `-a`, recorded as `a * -1`.
pub fn neg_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId) -> Result<NodeId, VecGradError> {
    mul_scalar_op(graph, a, -T::one())
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
