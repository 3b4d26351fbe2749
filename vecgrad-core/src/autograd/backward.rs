use super::backward_op::BackwardContext;
use super::graph::topological_sort;
use crate::error::VecGradError;
use crate::graph::{Graph, NodeId};
use crate::scalar::Scalar;
use log::{debug, trace};

impl<T: Scalar> Graph<T> {
    /// Runs the backward pass from `root`.
    ///
    /// Seeds every element of `root`'s gradient with one, then visits the
    /// reachable nodes in reverse topological order and applies each
    /// operator node's backward rule. Afterwards every reachable node holds
    /// the gradient of `root` with respect to it, summed over all paths.
    ///
    /// Gradients of operator nodes are reset at the start of each pass, so
    /// they always describe the current pass. Leaf gradients are never
    /// reset here: calling `backward` again without [`Graph::clear_grad`]
    /// adds the new contribution on top of the previous one.
    ///
    /// A leaf `root` is valid and only has its gradient seeded.
    ///
    /// # Errors
    /// `InvalidNode` if `root` (or any node reachable from it) is stale.
    pub fn backward(&mut self, root: NodeId) -> Result<(), VecGradError> {
        let order = topological_sort(self, root)?;
        debug!(
            "backward: {} nodes reachable from {}",
            order.len(),
            root
        );

        for id in &order {
            let node = &mut self.nodes[id.index];
            if !node.is_leaf() {
                node.clear_grad();
            }
        }
        self.nodes[root.index]
            .grad
            .iter_mut()
            .for_each(|g| *g = T::one());

        for id in order.iter().rev() {
            let (ancestors, rest) = self.nodes.split_at_mut(id.index);
            let (output, _) = rest.split_first().ok_or_else(|| {
                VecGradError::InternalError(format!("node {} missing from arena", id))
            })?;
            let op = match output.op.as_ref() {
                Some(op) => op,
                None => continue,
            };
            if output.parents.iter().any(|p| p.index >= id.index) {
                return Err(VecGradError::InternalError(format!(
                    "node {} has a parent allocated after it",
                    id
                )));
            }
            trace!("backward: {} ({})", id, op.name());
            let mut ctx = BackwardContext::new(output, ancestors);
            op.backward(&mut ctx);
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
