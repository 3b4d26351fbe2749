// vecgrad-optim/src/sgd.rs

use crate::Optimizer;
use log::debug;
use vecgrad_core::{Graph, NodeId, Scalar, VecGradError};

/// Hyperparameters for [`Sgd`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SgdConfig {
    /// Learning rate. Must be positive.
    pub lr: f64,
    /// Momentum factor in `[0, 1)`. Zero disables the velocity buffers.
    pub momentum: f64,
    /// L2 penalty added to each gradient as `weight_decay * data`.
    pub weight_decay: f64,
}

impl Default for SgdConfig {
    fn default() -> Self {
        SgdConfig {
            lr: 0.01,
            momentum: 0.0,
            weight_decay: 0.0,
        }
    }
}

impl SgdConfig {
    pub fn with_lr(mut self, lr: f64) -> Self {
        self.lr = lr;
        self
    }

    pub fn with_momentum(mut self, momentum: f64) -> Self {
        self.momentum = momentum;
        self
    }

    pub fn with_weight_decay(mut self, weight_decay: f64) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    /// Checks every field is finite and in range.
    pub fn validate(&self) -> Result<(), VecGradError> {
        if !self.lr.is_finite() || self.lr <= 0.0 {
            return Err(VecGradError::InvalidConfig(format!(
                "learning rate must be positive and finite, got {}",
                self.lr
            )));
        }
        if !self.momentum.is_finite() || !(0.0..1.0).contains(&self.momentum) {
            return Err(VecGradError::InvalidConfig(format!(
                "momentum must be in [0, 1), got {}",
                self.momentum
            )));
        }
        if !self.weight_decay.is_finite() || self.weight_decay < 0.0 {
            return Err(VecGradError::InvalidConfig(format!(
                "weight decay must be non-negative and finite, got {}",
                self.weight_decay
            )));
        }
        Ok(())
    }
}

/// Stochastic gradient descent, optionally with momentum and weight decay.
///
/// For every parameter `p` with gradient `g`:
///
/// ```text
/// g' = g + weight_decay * p
/// v  = momentum * v + g'      (only when momentum > 0)
/// p  = p - lr * v             (or p - lr * g')
/// ```
///
/// Gradients are read, never cleared, by [`Optimizer::step`].
#[derive(Debug)]
pub struct Sgd<T: Scalar> {
    params: Vec<NodeId>,
    lr: T,
    momentum: T,
    weight_decay: T,
    // One velocity per parameter, allocated on the first step.
    momentum_buffers: Vec<Vec<T>>,
    steps: usize,
}

impl<T: Scalar> Sgd<T> {
    /// Creates an optimizer over `params` (typically `module.parameters()`).
    ///
    /// # Errors
    /// `InvalidConfig` if `config` fails [`SgdConfig::validate`] or a value
    /// cannot be represented in `T`.
    pub fn new(params: impl IntoIterator<Item = NodeId>, config: SgdConfig) -> Result<Self, VecGradError> {
        config.validate()?;
        let params: Vec<NodeId> = params.into_iter().collect();
        let momentum_buffers = vec![Vec::new(); params.len()];
        debug!(
            "Sgd::new: {} parameters, lr = {}, momentum = {}, weight_decay = {}",
            params.len(),
            config.lr,
            config.momentum,
            config.weight_decay
        );
        Ok(Sgd {
            params,
            lr: cast(config.lr, "lr")?,
            momentum: cast(config.momentum, "momentum")?,
            weight_decay: cast(config.weight_decay, "weight_decay")?,
            momentum_buffers,
            steps: 0,
        })
    }

    pub fn params(&self) -> &[NodeId] {
        &self.params
    }

    pub fn lr(&self) -> T {
        self.lr
    }

    /// Changes the learning rate for subsequent steps.
    pub fn set_lr(&mut self, lr: T) -> Result<(), VecGradError> {
        if !lr.is_finite() || lr <= T::zero() {
            return Err(VecGradError::InvalidConfig(format!(
                "learning rate must be positive and finite, got {:?}",
                lr
            )));
        }
        self.lr = lr;
        Ok(())
    }

    /// Number of completed steps.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

fn cast<T: Scalar>(value: f64, field: &str) -> Result<T, VecGradError> {
    num_traits::cast::<f64, T>(value).ok_or_else(|| {
        VecGradError::InvalidConfig(format!("{} = {} is not representable", field, value))
    })
}

impl<T: Scalar> Optimizer<T> for Sgd<T> {
    fn step(&mut self, graph: &mut Graph<T>) -> Result<(), VecGradError> {
        let lr = self.lr;
        let momentum = self.momentum;
        let weight_decay = self.weight_decay;
        let use_momentum = momentum > T::zero();

        for (param, buffer) in self.params.iter().zip(self.momentum_buffers.iter_mut()) {
            graph.update_data_with(*param, |data, grad| {
                if use_momentum && buffer.len() != data.len() {
                    *buffer = vec![T::zero(); data.len()];
                }
                for (i, (p, &g)) in data.iter_mut().zip(grad).enumerate() {
                    let mut d_p = g + weight_decay * *p;
                    if use_momentum {
                        buffer[i] = momentum * buffer[i] + d_p;
                        d_p = buffer[i];
                    }
                    *p -= lr * d_p;
                }
            })?;
        }

        self.steps += 1;
        debug!(
            "Sgd::step: step {} updated {} parameters",
            self.steps,
            self.params.len()
        );
        Ok(())
    }

    fn zero_grad(&mut self, graph: &mut Graph<T>) -> Result<(), VecGradError> {
        graph.zero_grad(&self.params)
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
