use rand::Rng;
use valuegrad_core::{Value, ValueGradError};

use crate::config::{Activation, NeuronConfig};
use crate::module::{check_input_len, log_built, Module};

/// A single unit computing `activation(b + sum(w_i * x_i))`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `nin` inputs and the default configuration
    /// (uniform weights in `[-1, 1)`, tanh), drawing from the thread-local RNG.
    pub fn new(nin: usize) -> Self {
        Self::with_config(nin, &NeuronConfig::default(), &mut rand::thread_rng())
    }

    /// Creates a neuron whose parameters are drawn from `config.init` using `rng`.
    ///
    /// Weights are drawn first, in input order, then the bias; the same seed therefore
    /// always yields the same neuron.
    pub fn with_config<R: Rng>(nin: usize, config: &NeuronConfig, rng: &mut R) -> Self {
        let weights = (0..nin)
            .map(|i| Value::with_label(config.init.sample(rng), format!("w{}", i)))
            .collect();
        let bias = Value::with_label(config.init.sample(rng), "b");
        let neuron = Neuron {
            weights,
            bias,
            activation: config.activation,
        };
        log_built("Neuron", nin, 1, neuron.num_parameters());
        neuron
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }
}

impl Module for Neuron {
    type Output = Value;

    fn forward(&self, inputs: &[Value]) -> Result<Value, ValueGradError> {
        check_input_len(self.nin(), inputs)?;
        let pre_activation = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias.clone(), |acc, (w, x)| &acc + &(w * x));
        Ok(self.activation.apply(&pre_activation))
    }

    /// Weights in input order, then the bias.
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut named: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w{}", i), w.clone()))
            .collect();
        named.push(("b".to_string(), self.bias.clone()));
        named
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
