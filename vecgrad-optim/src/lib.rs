//! Optimizers for parameters living in a vecgrad [`Graph`].
//!
//! An optimizer holds the handles of the leaves it updates; the values and
//! gradients stay in the graph, which is passed to every call.

use vecgrad_core::{Graph, Scalar, VecGradError};

pub mod sgd;

pub use sgd::{Sgd, SgdConfig};

/// Trait for optimization algorithms.
pub trait Optimizer<T: Scalar> {
    /// Applies one update to every managed parameter from its current
    /// gradient.
    ///
    /// # Errors
    /// `InvalidNode` if a parameter handle no longer resolves in `graph`.
    fn step(&mut self, graph: &mut Graph<T>) -> Result<(), VecGradError>;

    /// Clears the gradient of every managed parameter. Call it after each
    /// step: backward passes add into leaf gradients.
    fn zero_grad(&mut self, graph: &mut Graph<T>) -> Result<(), VecGradError>;
}
