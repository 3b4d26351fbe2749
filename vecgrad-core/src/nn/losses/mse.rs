use crate::error::VecGradError;
use crate::graph::{Graph, NodeId};
use crate::scalar::Scalar;

/// How the squared errors are combined into the single-element loss.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Reduction {
    /// Sum of squared errors.
    #[default]
    Sum,
    /// Mean of squared errors. The mean of an empty prediction is NaN.
    Mean,
}

/// Squared-error loss between a prediction and a target of equal size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds `d . d` with `d = prediction - target`, divided by the size
    /// for [`Reduction::Mean`].
    ///
    /// # Errors
    /// `ShapeMismatch` if the sizes differ.
    pub fn forward<T: Scalar>(
        &self,
        graph: &mut Graph<T>,
        prediction: NodeId,
        target: NodeId,
    ) -> Result<NodeId, VecGradError> {
        let diff = graph.sub(prediction, target)?;
        let squared = graph.dot(diff, diff)?;
        match self.reduction {
            Reduction::Sum => Ok(squared),
            Reduction::Mean => {
                let n = T::from_f64_lossy(graph.size(prediction)? as f64);
                graph.div_scalar(squared, n)
            }
        }
    }
}

/// Sum of squared errors, `dot(prediction - target, prediction - target)`.
pub fn mse_loss<T: Scalar>(
    graph: &mut Graph<T>,
    prediction: NodeId,
    target: NodeId,
) -> Result<NodeId, VecGradError> {
    MseLoss::default().forward(graph, prediction, target)
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
