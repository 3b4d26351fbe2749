use super::{Graph, NodeId};
use crate::error::VecGradError;
use crate::ops;
use crate::scalar::Scalar;

/// Operator methods. Each delegates to the matching `ops::*_op` function.
impl<T: Scalar> Graph<T> {
    pub fn add(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, VecGradError> {
        ops::add_op(self, a, b)
    }

    pub fn sub(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, VecGradError> {
        ops::sub_op(self, a, b)
    }

    pub fn mul(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, VecGradError> {
        ops::mul_op(self, a, b)
    }

    /// Elementwise division. Zero denominators are not checked.
    pub fn div(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, VecGradError> {
        ops::div_op(self, a, b)
    }

    pub fn neg(&mut self, a: NodeId) -> Result<NodeId, VecGradError> {
        ops::neg_op(self, a)
    }

    pub fn add_scalar(&mut self, a: NodeId, c: T) -> Result<NodeId, VecGradError> {
        ops::add_scalar_op(self, a, c)
    }

    pub fn sub_scalar(&mut self, a: NodeId, c: T) -> Result<NodeId, VecGradError> {
        ops::sub_scalar_op(self, a, c)
    }

    pub fn mul_scalar(&mut self, a: NodeId, c: T) -> Result<NodeId, VecGradError> {
        ops::mul_scalar_op(self, a, c)
    }

    pub fn div_scalar(&mut self, a: NodeId, c: T) -> Result<NodeId, VecGradError> {
        ops::div_scalar_op(self, a, c)
    }

    /// Raises every element to a constant `exponent`.
    pub fn pow(&mut self, a: NodeId, exponent: T) -> Result<NodeId, VecGradError> {
        ops::pow_op(self, a, exponent)
    }

    pub fn exp(&mut self, a: NodeId) -> Result<NodeId, VecGradError> {
        ops::exp_op(self, a)
    }

    pub fn tanh(&mut self, a: NodeId) -> Result<NodeId, VecGradError> {
        ops::tanh_op(self, a)
    }

    /// Single-element sum of all elements.
    pub fn sum(&mut self, a: NodeId) -> Result<NodeId, VecGradError> {
        ops::sum_op(self, a)
    }

    /// Single-element inner product.
    pub fn dot(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, VecGradError> {
        ops::dot_op(self, a, b)
    }

    pub fn concat(&mut self, inputs: &[NodeId]) -> Result<NodeId, VecGradError> {
        ops::concat_op(self, inputs)
    }
}
