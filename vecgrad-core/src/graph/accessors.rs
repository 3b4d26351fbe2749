use super::{Graph, NodeId};
use crate::error::VecGradError;
use crate::scalar::Scalar;

impl<T: Scalar> Graph<T> {
    /// Element count of a node.
    pub fn size(&self, id: NodeId) -> Result<usize, VecGradError> {
        Ok(self.node(id)?.size())
    }

    /// Detached copy of the forward values.
    pub fn data(&self, id: NodeId) -> Result<Vec<T>, VecGradError> {
        Ok(self.node(id)?.data.clone())
    }

    /// Detached copy of the accumulated gradient.
    ///
    /// For leaves this sums every `backward` call since the last
    /// [`Graph::clear_grad`]. Operator nodes are reset at the start of each
    /// `backward`, so theirs only reflects the most recent pass that
    /// reached them.
    pub fn grad(&self, id: NodeId) -> Result<Vec<T>, VecGradError> {
        Ok(self.node(id)?.grad.clone())
    }

    pub fn parents(&self, id: NodeId) -> Result<&[NodeId], VecGradError> {
        Ok(self.node(id)?.parents())
    }

    pub fn is_leaf(&self, id: NodeId) -> Result<bool, VecGradError> {
        Ok(self.node(id)?.is_leaf())
    }

    /// Reads one forward element.
    pub fn get(&self, id: NodeId, index: usize) -> Result<T, VecGradError> {
        let node = self.node(id)?;
        node.data
            .get(index)
            .copied()
            .ok_or(VecGradError::IndexOutOfRange {
                index,
                size: node.size(),
            })
    }

    /// Overwrites one forward element.
    ///
    /// Nodes already derived from `id` keep the values they were computed
    /// with; the graph is never re-evaluated.
    pub fn set(&mut self, id: NodeId, index: usize, value: T) -> Result<(), VecGradError> {
        let node = self.node_mut(id)?;
        let size = node.size();
        match node.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(VecGradError::IndexOutOfRange { index, size }),
        }
    }

    /// Replaces the forward values. The new buffer must keep the node's size.
    pub fn set_data(&mut self, id: NodeId, values: &[T]) -> Result<(), VecGradError> {
        let node = self.node_mut(id)?;
        if values.len() != node.size() {
            return Err(VecGradError::shape_mismatch(
                node.size(),
                values.len(),
                "set_data",
            ));
        }
        node.data.copy_from_slice(values);
        Ok(())
    }

    /// Mutates a node's forward values in place, with read access to its
    /// gradient. This is the hook optimizers use for parameter updates.
    pub fn update_data_with<F>(&mut self, id: NodeId, f: F) -> Result<(), VecGradError>
    where
        F: FnOnce(&mut [T], &[T]),
    {
        let node = self.node_mut(id)?;
        f(node.data.as_mut_slice(), node.grad.as_slice());
        Ok(())
    }

    /// Resets a node's gradient to zero.
    pub fn clear_grad(&mut self, id: NodeId) -> Result<(), VecGradError> {
        self.node_mut(id)?.clear_grad();
        Ok(())
    }

    /// Resets the gradient of every listed node. Validates all handles
    /// before touching any gradient.
    pub fn zero_grad(&mut self, ids: &[NodeId]) -> Result<(), VecGradError> {
        for &id in ids {
            self.check(id)?;
        }
        for &id in ids {
            self.nodes[id.index].clear_grad();
        }
        Ok(())
    }
}
