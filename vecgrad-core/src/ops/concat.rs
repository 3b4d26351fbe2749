use crate::autograd::backward_op::BackwardContext;
use crate::autograd::Op;
use crate::error::VecGradError;
use crate::graph::{Graph, Node, NodeId};
use crate::scalar::Scalar;

/// Concatenates `inputs` end to end.
///
/// An empty list yields a size-0 node. The same node may appear several
/// times; each occurrence is its own parent slot and receives the gradient
/// of its own output range.
pub fn concat_op<T: Scalar>(graph: &mut Graph<T>, inputs: &[NodeId]) -> Result<NodeId, VecGradError> {
    let mut offsets = Vec::with_capacity(inputs.len());
    let mut data = Vec::new();
    for &id in inputs {
        offsets.push(data.len());
        data.extend_from_slice(graph.node(id)?.data());
    }
    Ok(graph.push(Node::derived(data, inputs.to_vec(), Op::Concat { offsets })))
}

/// Hands each parent the slice of the output gradient it produced.
pub(crate) fn concat_backward<T: Scalar>(ctx: &mut BackwardContext<'_, T>, offsets: &[usize]) {
    let out = ctx.output();
    for (k, &offset) in offsets.iter().enumerate() {
        let size = ctx.parent_data(k).len();
        for (i, &g) in out.grad()[offset..offset + size].iter().enumerate() {
            ctx.accumulate(k, i, g);
        }
    }
}

#[cfg(test)]
#[path = "concat_test.rs"]
mod tests;
