use rand::Rng;
use valuegrad_core::{Value, ValueGradError};

use crate::config::MlpConfig;
use crate::layer::Layer;
use crate::module::{check_input_len, log_built, prefixed, Module};

/// A multi-layer perceptron: fully connected layers applied one after another.
///
/// `Mlp::new(3, &[4, 4, 1])` builds the layers `3 -> 4`, `4 -> 4` and `4 -> 1`.
///
/// ```
/// use valuegrad_core::Value;
/// use valuegrad_nn::{Mlp, Module};
///
/// let net = Mlp::new(3, &[4, 4, 1]);
/// assert_eq!(net.num_parameters(), 41);
///
/// let x: Vec<Value> = [2.0, 3.0, -1.0].iter().map(|&v| Value::new(v)).collect();
/// let out = net.forward(&x).unwrap();
/// assert_eq!(out.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Mlp {
    nin: usize,
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates a network with the default configuration, drawing from the thread-local RNG.
    pub fn new(nin: usize, nouts: &[usize]) -> Self {
        Self::with_config(nin, nouts, &MlpConfig::default(), &mut rand::thread_rng())
    }

    /// Creates a network whose parameters are drawn from `config.init` using `rng`,
    /// layer by layer.
    pub fn with_config<R: Rng>(nin: usize, nouts: &[usize], config: &MlpConfig, rng: &mut R) -> Self {
        let sizes: Vec<usize> = std::iter::once(nin).chain(nouts.iter().copied()).collect();
        let layers = sizes
            .windows(2)
            .enumerate()
            .map(|(k, pair)| {
                let layer_config = config.layer_config(k, nouts.len());
                Layer::with_config(pair[0], pair[1], &layer_config, rng)
            })
            .collect();
        let mlp = Mlp { nin, layers };
        log_built("Mlp", nin, mlp.nout(), mlp.num_parameters());
        mlp
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    /// Width of the last layer (`nin` for a network without layers).
    pub fn nout(&self) -> usize {
        self.layers.last().map_or(self.nin, Layer::nout)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    type Output = Vec<Value>;

    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ValueGradError> {
        check_input_len(self.nin, inputs)?;
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(k, l)| prefixed(&format!("layer{}", k), l.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
