use rand::Rng;
use valuegrad_core::{Value, ValueGradError};

use crate::config::NeuronConfig;
use crate::module::{check_input_len, log_built, prefixed, Module};
use crate::neuron::Neuron;

/// `nout` neurons reading the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    nin: usize,
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates a fully connected layer with the default neuron configuration.
    pub fn new(nin: usize, nout: usize) -> Self {
        Self::with_config(nin, nout, &NeuronConfig::default(), &mut rand::thread_rng())
    }

    pub fn with_config<R: Rng>(nin: usize, nout: usize, config: &NeuronConfig, rng: &mut R) -> Self {
        let neurons = (0..nout)
            .map(|_| Neuron::with_config(nin, config, rng))
            .collect();
        let layer = Layer { nin, neurons };
        log_built("Layer", nin, nout, layer.num_parameters());
        layer
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    type Output = Vec<Value>;

    /// One output per neuron, in neuron order.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ValueGradError> {
        check_input_len(self.nin, inputs)?;
        self.neurons.iter().map(|n| n.forward(inputs)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(j, n)| prefixed(&format!("neuron{}", j), n.named_parameters()))
            .collect()
    }
}
