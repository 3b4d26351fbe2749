// src/graph/create.rs

use super::{Graph, Node, NodeId};
use crate::error::VecGradError;
use crate::scalar::Scalar;
use rand::Rng;

/// Leaf factories. None of these record parents or a backward rule.
impl<T: Scalar> Graph<T> {
    /// Creates a leaf from literal values.
    pub fn leaf(&mut self, values: Vec<T>) -> NodeId {
        self.push(Node::leaf(values))
    }

    /// Creates a leaf by copying a slice.
    pub fn leaf_from_slice(&mut self, values: &[T]) -> NodeId {
        self.leaf(values.to_vec())
    }

    /// Creates a leaf of `size` zeros.
    pub fn zeros(&mut self, size: usize) -> NodeId {
        self.constant(size, T::zero())
    }

    /// Creates a leaf with every element set to `value`.
    pub fn constant(&mut self, size: usize, value: T) -> NodeId {
        self.leaf(vec![value; size])
    }

    /// Creates a leaf sampled uniformly from `[lo, hi)`.
    ///
    /// `lo == hi` fills with that value. The width `hi - lo` must itself be
    /// finite, so `[-MAX, MAX)` is rejected.
    pub fn uniform(&mut self, size: usize, lo: T, hi: T) -> Result<NodeId, VecGradError> {
        if !lo.is_finite() || !hi.is_finite() || lo > hi || !(hi - lo).is_finite() {
            return Err(VecGradError::InvalidDistribution(format!(
                "uniform requires finite bounds with lo <= hi and a finite width, got [{:?}, {:?})",
                lo, hi
            )));
        }
        if lo == hi {
            return Ok(self.constant(size, lo));
        }
        let rng = &mut self.rng;
        let values: Vec<T> = (0..size).map(|_| rng.gen_range(lo..hi)).collect();
        Ok(self.leaf(values))
    }

    /// Creates a leaf sampled from `N(mean, stddev^2)`.
    pub fn normal(&mut self, size: usize, mean: T, stddev: T) -> Result<NodeId, VecGradError> {
        if !mean.is_finite() || !stddev.is_finite() || stddev < T::zero() {
            return Err(VecGradError::InvalidDistribution(format!(
                "normal requires finite mean and non-negative stddev, got mean {:?}, stddev {:?}",
                mean, stddev
            )));
        }
        let rng = &mut self.rng;
        let values: Vec<T> = (0..size)
            .map(|_| mean + stddev * T::sample_standard_normal(&mut *rng))
            .collect();
        Ok(self.leaf(values))
    }
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
