use super::add::add_op;
use super::neg::neg_op;
use crate::error::VecGradError;
use crate::graph::{Graph, NodeId};
use crate::scalar::Scalar;

/// Elementwise `a - b`, built as `a + (-b)`.
///
/// Sizes are checked before the negation node is allocated, so a mismatch
/// leaves the graph unchanged.
pub fn sub_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, b: NodeId) -> Result<NodeId, VecGradError> {
    let a_size = graph.size(a)?;
    let b_size = graph.size(b)?;
    if a_size != b_size {
        return Err(VecGradError::shape_mismatch(a_size, b_size, "sub"));
    }
    let neg_b = neg_op(graph, b)?;
    add_op(graph, a, neg_b)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
