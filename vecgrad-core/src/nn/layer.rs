use crate::error::VecGradError;
use crate::graph::{Graph, NodeId};
use crate::nn::module::{prefixed, Module};
use crate::nn::neuron::Neuron;
use crate::scalar::Scalar;

/// `n_out` independent neurons over the same input; the output is the
/// concatenation of their activations.
#[derive(Debug, Clone)]
pub struct Layer<T: Scalar> {
    neurons: Vec<Neuron<T>>,
    n_in: usize,
}

impl<T: Scalar> Layer<T> {
    pub fn new(graph: &mut Graph<T>, n_in: usize, n_out: usize) -> Result<Self, VecGradError> {
        let neurons = (0..n_out)
            .map(|_| Neuron::new(graph, n_in))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons, n_in })
    }

    pub fn neurons(&self) -> &[Neuron<T>] {
        &self.neurons
    }

    pub fn n_in(&self) -> usize {
        self.n_in
    }

    pub fn n_out(&self) -> usize {
        self.neurons.len()
    }
}

impl<T: Scalar> Module<T> for Layer<T> {
    fn forward(&self, graph: &mut Graph<T>, input: NodeId) -> Result<NodeId, VecGradError> {
        let outputs = self
            .neurons
            .iter()
            .map(|neuron| neuron.forward(graph, input))
            .collect::<Result<Vec<_>, _>>()?;
        graph.concat(&outputs)
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, neuron)| prefixed(&format!("neurons.{}", i), neuron.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
