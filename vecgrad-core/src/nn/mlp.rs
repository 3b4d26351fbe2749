use crate::error::VecGradError;
use crate::graph::{Graph, NodeId};
use crate::nn::layer::Layer;
use crate::nn::module::{prefixed, Module};
use crate::scalar::Scalar;
use log::debug;

/// Multi-layer perceptron: a chain of [`Layer`]s, each feeding the next.
#[derive(Debug, Clone)]
pub struct Mlp<T: Scalar> {
    layers: Vec<Layer<T>>,
}

impl<T: Scalar> Mlp<T> {
    /// Builds layers of sizes `n_in -> n_outs[0] -> n_outs[1] -> ...`.
    ///
    /// With an empty `n_outs` the network is the identity.
    pub fn new(graph: &mut Graph<T>, n_in: usize, n_outs: &[usize]) -> Result<Self, VecGradError> {
        let mut layers = Vec::with_capacity(n_outs.len());
        let mut current_in = n_in;
        for &n_out in n_outs {
            layers.push(Layer::new(graph, current_in, n_out)?);
            current_in = n_out;
        }
        let mlp = Mlp { layers };
        debug!(
            "Mlp::new: {} -> {:?}, {} parameter nodes",
            n_in,
            n_outs,
            mlp.parameters().len()
        );
        Ok(mlp)
    }

    pub fn layers(&self) -> &[Layer<T>] {
        &self.layers
    }
}

impl<T: Scalar> Module<T> for Mlp<T> {
    fn forward(&self, graph: &mut Graph<T>, input: NodeId) -> Result<NodeId, VecGradError> {
        self.layers
            .iter()
            .try_fold(input, |current, layer| layer.forward(graph, current))
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, layer)| {
                prefixed(&format!("layers.{}", i), layer.named_parameters())
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
