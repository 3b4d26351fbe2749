use crate::autograd::backward_op::Op;
use crate::scalar::Scalar;
use std::fmt;

/// Handle to a node owned by a [`Graph`](crate::Graph).
///
/// The generation is bumped whenever a slot is released by
/// [`Graph::truncate`](crate::Graph::truncate), so handles that outlive
/// their node are rejected instead of silently aliasing a newer node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl NodeId {
    /// Position of the node in its graph's arena.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

/// A fixed-length vector with its gradient buffer.
///
/// Leaves (inputs, parameters) have no parents and no op. Nodes produced by
/// an operator keep their parent handles and the [`Op`] tag that knows how
/// to push this node's gradient back onto those parents.
///
/// `data` and `grad` always have the same length, fixed at construction.
pub struct Node<T: Scalar> {
    pub(crate) data: Vec<T>,
    pub(crate) grad: Vec<T>,
    pub(crate) parents: Vec<NodeId>,
    pub(crate) op: Option<Op<T>>,
}

impl<T: Scalar> Node<T> {
    pub(crate) fn leaf(data: Vec<T>) -> Self {
        let grad = vec![T::zero(); data.len()];
        Node {
            data,
            grad,
            parents: Vec::new(),
            op: None,
        }
    }

    pub(crate) fn derived(data: Vec<T>, parents: Vec<NodeId>, op: Op<T>) -> Self {
        let grad = vec![T::zero(); data.len()];
        Node {
            data,
            grad,
            parents,
            op: Some(op),
        }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Current forward values.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Current accumulated gradient.
    pub fn grad(&self) -> &[T] {
        &self.grad
    }

    pub fn parents(&self) -> &[NodeId] {
        &self.parents
    }

    /// The backward rule, `None` for leaves.
    pub fn op(&self) -> Option<&Op<T>> {
        self.op.as_ref()
    }

    pub fn is_leaf(&self) -> bool {
        self.op.is_none()
    }

    pub(crate) fn clear_grad(&mut self) {
        self.grad.iter_mut().for_each(|g| *g = T::zero());
    }
}

impl<T: Scalar> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("size", &self.size())
            .field("op", &self.op)
            .field("parents", &self.parents)
            .field("data", &self.data)
            .field("grad", &self.grad)
            .finish()
    }
}
