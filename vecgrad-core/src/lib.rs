//! # vecgrad-core
//!
//! Reverse-mode automatic differentiation over fixed-length vectors.
//!
//! Every value lives in a [`Graph`] arena and is referred to through a
//! [`NodeId`]. Operators compute their forward value eagerly and record a
//! tagged backward rule; [`Graph::backward`] walks the graph in reverse
//! topological order and accumulates gradients into every contributing node.
//!
//! ```
//! use vecgrad_core::{Graph, VecGradError};
//!
//! # fn main() -> Result<(), VecGradError> {
//! let mut graph: Graph = Graph::new();
//! let a = graph.leaf(vec![2.0]);
//! let b = graph.leaf(vec![-3.0]);
//! let c = graph.mul(a, b)?;
//! graph.backward(c)?;
//! assert_eq!(graph.grad(a)?, vec![-3.0]);
//! assert_eq!(graph.grad(b)?, vec![2.0]);
//! # Ok(())
//! # }
//! ```

pub mod autograd;
pub mod error;
pub mod graph;
pub mod nn;
pub mod ops;
pub mod scalar;
pub mod utils;

pub use error::VecGradError;
pub use graph::{Checkpoint, Graph, GraphConfig, Node, NodeId};
pub use scalar::Scalar;

// Re-export traits required by public bounds
pub use num_traits;
