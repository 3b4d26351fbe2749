// src/nn/mod.rs
// Network building blocks on top of the operator library.

pub mod layer;
pub mod losses;
pub mod mlp;
pub mod module;
pub mod neuron;

pub use layer::Layer;
pub use losses::{mse_loss, MseLoss, Reduction};
pub use mlp::Mlp;
pub use module::Module;
pub use neuron::Neuron;
