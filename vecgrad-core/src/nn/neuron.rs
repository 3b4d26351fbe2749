use crate::error::VecGradError;
use crate::graph::{Graph, NodeId};
use crate::nn::module::Module;
use crate::scalar::Scalar;
use std::marker::PhantomData;

/// `tanh(w . x + b)` for an input of size `n_in`.
#[derive(Debug, Clone, Copy)]
pub struct Neuron<T: Scalar> {
    weight: NodeId,
    bias: NodeId,
    n_in: usize,
    _marker: PhantomData<T>,
}

impl<T: Scalar> Neuron<T> {
    /// Allocates the weight (`n_in` elements) and the bias (one element),
    /// both drawn uniformly from `[-1, 1)` with the graph's RNG.
    pub fn new(graph: &mut Graph<T>, n_in: usize) -> Result<Self, VecGradError> {
        let weight = graph.uniform(n_in, -T::one(), T::one())?;
        let bias = graph.uniform(1, -T::one(), T::one())?;
        Ok(Neuron {
            weight,
            bias,
            n_in,
            _marker: PhantomData,
        })
    }

    pub fn weight(&self) -> NodeId {
        self.weight
    }

    pub fn bias(&self) -> NodeId {
        self.bias
    }

    pub fn n_in(&self) -> usize {
        self.n_in
    }
}

impl<T: Scalar> Module<T> for Neuron<T> {
    fn forward(&self, graph: &mut Graph<T>, input: NodeId) -> Result<NodeId, VecGradError> {
        let activation = graph.dot(self.weight, input)?;
        let shifted = graph.add(activation, self.bias)?;
        graph.tanh(shifted)
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        vec![
            ("weight".to_string(), self.weight),
            ("bias".to_string(), self.bias),
        ]
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
