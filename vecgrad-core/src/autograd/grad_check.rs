use crate::error::VecGradError;
use crate::graph::{Graph, NodeId};
use crate::scalar::Scalar;
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}, element {element_index}: analytical {analytical_grad:?} != numerical {numerical_grad:?} (difference {difference:?})")]
    GradientMismatch {
        input_index: usize,
        element_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}, element {element_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        element_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}, element {element_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite {
        input_index: usize,
        element_index: usize,
        value: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(VecGradError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(VecGradError),

    #[error("Graph error during gradient check: {0}")]
    GraphError(#[from] VecGradError),
}

/// Checks analytical gradients against central finite differences.
///
/// `func` builds a node from leaves holding `inputs`, on a fresh graph for
/// every evaluation. The scalar being differentiated is the sum of the
/// output's elements, so each output element is seeded with one.
///
/// For each input element the numerical gradient is
/// `(L(x + eps) - L(x - eps)) / (2 * eps)` and must match the analytical one
/// within `tolerance` (absolute or relative).
pub fn check_grad<T, F>(
    func: F,
    inputs: &[Vec<T>],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    T: Scalar,
    F: Fn(&mut Graph<T>, &[NodeId]) -> Result<NodeId, VecGradError>,
{
    // --- 1. Analytical gradients ---
    let mut graph: Graph<T> = Graph::new();
    let leaves: Vec<NodeId> = inputs.iter().map(|v| graph.leaf(v.clone())).collect();
    let output = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    let loss = graph.sum(output)?;
    graph
        .backward(loss)
        .map_err(GradCheckError::BackwardPassError)?;

    let mut analytical: Vec<Vec<f64>> = Vec::with_capacity(leaves.len());
    for &leaf in &leaves {
        let grad: Vec<f64> = graph.grad(leaf)?.into_iter().map(T::to_f64_lossy).collect();
        analytical.push(grad);
    }

    // --- 2. Numerical gradients, element by element ---
    for (input_index, input) in inputs.iter().enumerate() {
        for element_index in 0..input.len() {
            let loss_plus = perturbed_loss(&func, inputs, input_index, element_index, epsilon)?;
            let loss_minus = perturbed_loss(&func, inputs, input_index, element_index, -epsilon)?;
            let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
            let analytical_grad = analytical[input_index][element_index];

            if !numerical_grad.is_finite() {
                return Err(GradCheckError::NumericalGradNaNOrInfinite {
                    input_index,
                    element_index,
                    loss_plus,
                    loss_minus,
                });
            }
            if !analytical_grad.is_finite() {
                return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                    input_index,
                    element_index,
                    value: analytical_grad,
                });
            }

            if !relative_eq!(
                analytical_grad,
                numerical_grad,
                epsilon = tolerance,
                max_relative = tolerance
            ) {
                return Err(GradCheckError::GradientMismatch {
                    input_index,
                    element_index,
                    analytical_grad,
                    numerical_grad,
                    difference: (analytical_grad - numerical_grad).abs(),
                });
            }
        }
    }

    debug!(
        "check_grad: {} inputs matched within tolerance {}",
        inputs.len(),
        tolerance
    );
    Ok(())
}

/// Evaluates `sum(func(inputs))` with one element shifted by `delta`.
fn perturbed_loss<T, F>(
    func: &F,
    inputs: &[Vec<T>],
    input_index: usize,
    element_index: usize,
    delta: f64,
) -> Result<f64, GradCheckError>
where
    T: Scalar,
    F: Fn(&mut Graph<T>, &[NodeId]) -> Result<NodeId, VecGradError>,
{
    let mut graph: Graph<T> = Graph::new();
    let leaves: Vec<NodeId> = inputs
        .iter()
        .enumerate()
        .map(|(i, values)| {
            let mut values = values.clone();
            if i == input_index {
                let shifted = values[element_index].to_f64_lossy() + delta;
                values[element_index] = T::from_f64_lossy(shifted);
            }
            graph.leaf(values)
        })
        .collect();
    let output = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    let loss = graph.sum(output)?;
    Ok(graph.get(loss, 0)?.to_f64_lossy())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
