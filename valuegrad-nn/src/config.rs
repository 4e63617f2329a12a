use valuegrad_core::Value;

use crate::init::Init;

/// Nonlinearity applied to a neuron's pre-activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    Relu,
    Sigmoid,
    /// Identity: the pre-activation is returned unchanged.
    Linear,
}

impl Activation {
    pub fn apply(&self, x: &Value) -> Value {
        match self {
            Activation::Tanh => x.tanh(),
            Activation::Relu => x.relu(),
            Activation::Sigmoid => x.sigmoid(),
            Activation::Linear => x.clone(),
        }
    }
}

/// Configuration for a single neuron (and for every neuron of a layer).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NeuronConfig {
    pub init: Init,
    pub activation: Activation,
}

/// Configuration for an [`Mlp`](crate::Mlp).
///
/// Hidden layers use `activation`; the last layer uses `output_activation`, which lets a
/// regression network end in `Activation::Linear`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MlpConfig {
    pub init: Init,
    pub activation: Activation,
    pub output_activation: Activation,
}

impl MlpConfig {
    /// The neuron configuration used for layer `index` of `num_layers`.
    pub fn layer_config(&self, index: usize, num_layers: usize) -> NeuronConfig {
        let activation = if index + 1 == num_layers {
            self.output_activation
        } else {
            self.activation
        };
        NeuronConfig {
            init: self.init,
            activation,
        }
    }
}
