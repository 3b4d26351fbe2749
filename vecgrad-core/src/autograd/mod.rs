//! Reverse-mode differentiation over a [`Graph`](crate::Graph).
//!
//! - [`backward_op`]: the [`Op`] tags recorded by operators and their
//!   gradient rules.
//! - [`graph`]: topological ordering of the nodes reachable from a root.
//! - `backward`: the driver, exposed as [`Graph::backward`](crate::Graph::backward).
//! - [`grad_check`]: finite-difference verification of analytic gradients.

mod backward;
pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::Op;
pub use grad_check::{check_grad, GradCheckError};
pub use graph::topological_sort;
