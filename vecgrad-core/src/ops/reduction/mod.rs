pub mod dot;
pub mod sum;

pub use dot::dot_op;
pub use sum::sum_op;
