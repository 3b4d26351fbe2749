use crate::graph::Node;
use crate::ops::arithmetic::{add, mul, pow, scalar};
use crate::ops::math_elem::{exp, tanh};
use crate::ops::reduction::sum;
use crate::ops::concat;
use crate::scalar::Scalar;

/// Backward rule recorded on every node produced by an operator.
///
/// Only primitive operators have a tag. Composite operators (`sub`, `div`,
/// `neg`, `dot`, scalar `sub`/`div`) are built out of these, so their
/// gradients follow from the primitive rules without extra code.
#[derive(Clone, Debug, PartialEq)]
pub enum Op<T> {
    /// `a + b`
    Add,
    /// `a * b`
    Mul,
    /// `a + c` for a constant `c`; the constant does not affect the gradient.
    AddScalar,
    /// `a * c` for a constant `c`.
    MulScalar(T),
    /// `a ^ e` for a constant exponent `e`.
    Pow(T),
    Exp,
    Tanh,
    /// Reduction of all elements into a single-element node.
    Sum,
    /// Concatenation; `offsets[k]` is where parent `k` starts in the output.
    Concat { offsets: Vec<usize> },
}

impl<T: Scalar> Op<T> {
    /// Short operator name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Mul => "mul",
            Op::AddScalar => "add_scalar",
            Op::MulScalar(_) => "mul_scalar",
            Op::Pow(_) => "pow",
            Op::Exp => "exp",
            Op::Tanh => "tanh",
            Op::Sum => "sum",
            Op::Concat { .. } => "concat",
        }
    }

    /// Adds this node's contribution into its parents' gradients.
    pub(crate) fn backward(&self, ctx: &mut BackwardContext<'_, T>) {
        match self {
            Op::Add => add::add_backward(ctx),
            Op::Mul => mul::mul_backward(ctx),
            Op::AddScalar => scalar::add_scalar_backward(ctx),
            Op::MulScalar(factor) => scalar::mul_scalar_backward(ctx, *factor),
            Op::Pow(exponent) => pow::pow_backward(ctx, *exponent),
            Op::Exp => exp::exp_backward(ctx),
            Op::Tanh => tanh::tanh_backward(ctx),
            Op::Sum => sum::sum_backward(ctx),
            Op::Concat { offsets } => concat::concat_backward(ctx, offsets),
        }
    }
}

/// View of the arena handed to a backward rule: the node being
/// differentiated, and the region below it where all of its parents live.
pub(crate) struct BackwardContext<'a, T: Scalar> {
    output: &'a Node<T>,
    ancestors: &'a mut [Node<T>],
}

impl<'a, T: Scalar> BackwardContext<'a, T> {
    /// Every parent of `output` must sit inside `ancestors`.
    pub(crate) fn new(output: &'a Node<T>, ancestors: &'a mut [Node<T>]) -> Self {
        debug_assert!(output.parents.iter().all(|p| p.index < ancestors.len()));
        BackwardContext { output, ancestors }
    }

    pub(crate) fn output(&self) -> &'a Node<T> {
        self.output
    }

    pub(crate) fn parent_data(&self, k: usize) -> &[T] {
        &self.ancestors[self.output.parents[k].index].data
    }

    /// `parent_k.grad[i] += value`
    pub(crate) fn accumulate(&mut self, k: usize, i: usize, value: T) {
        let index = self.output.parents[k].index;
        self.ancestors[index].grad[i] += value;
    }
}
