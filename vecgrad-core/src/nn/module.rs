use crate::error::VecGradError;
use crate::graph::{Graph, NodeId};
use crate::scalar::Scalar;
use std::fmt::Debug;

/// The base trait for all network modules (neurons, layers, containers).
///
/// A module owns handles to its parameter leaves; the values themselves
/// live in the [`Graph`] the module was built on. `forward` must be called
/// with that same graph.
pub trait Module<T: Scalar>: Debug {
    /// Builds the forward computation for `input` and returns its output node.
    ///
    /// # Errors
    /// `ShapeMismatch` if `input` does not have the size the module expects,
    /// `InvalidNode` for stale handles.
    fn forward(&self, graph: &mut Graph<T>, input: NodeId) -> Result<NodeId, VecGradError>;

    /// Learnable leaves, in a stable order: weights before biases, then
    /// sub-modules in construction order.
    fn parameters(&self) -> Vec<NodeId> {
        self.named_parameters()
            .into_iter()
            .map(|(_, id)| id)
            .collect()
    }

    /// Parameters with hierarchical dotted names (e.g. `layers.0.neurons.2.weight`).
    fn named_parameters(&self) -> Vec<(String, NodeId)>;
}

/// Prefixes every name of `params` with `prefix.`.
pub(crate) fn prefixed(prefix: &str, params: Vec<(String, NodeId)>) -> Vec<(String, NodeId)> {
    params
        .into_iter()
        .map(|(name, id)| (format!("{}.{}", prefix, name), id))
        .collect()
}
