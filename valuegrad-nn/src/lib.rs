//! # valuegrad-nn
//!
//! Small multi-layer perceptrons assembled from [`valuegrad_core::Value`] nodes.
//!
//! Every weight and bias is a leaf `Value`; a forward pass builds a fresh expression
//! graph on top of them, so `backward()` on a loss fills in each parameter's `grad()`.
//! Training loops live on the caller side: read the gradients, update the leaves with
//! [`Value::set_data`](valuegrad_core::Value::set_data), then call
//! [`Module::zero_grad`] before the next step.

pub mod config;
pub mod init;
pub mod layer;
pub mod mlp;
pub mod module;
pub mod neuron;

pub use config::{Activation, MlpConfig, NeuronConfig};
pub use init::Init;
pub use layer::Layer;
pub use mlp::Mlp;
pub use module::Module;
pub use neuron::Neuron;
