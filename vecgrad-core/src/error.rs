use thiserror::Error;

/// Error type shared by every vecgrad crate.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum VecGradError {
    #[error("Shape mismatch: expected size {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Index out of range: index {index} for node of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// The handle points at a slot that was never allocated or has been
    /// released by `Graph::truncate`.
    #[error("Invalid node handle: index {index}, generation {generation}")]
    InvalidNode { index: usize, generation: u32 },

    #[error("Invalid distribution parameters: {0}")]
    InvalidDistribution(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl VecGradError {
    pub(crate) fn shape_mismatch(expected: usize, actual: usize, operation: &str) -> Self {
        VecGradError::ShapeMismatch {
            expected,
            actual,
            operation: operation.to_string(),
        }
    }
}
