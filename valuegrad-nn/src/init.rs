use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Distribution the initial value of each parameter is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform over `[low, high)`. Degenerate ranges (`high <= low`) always yield `low`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
    /// Every parameter starts at the same value.
    Constant(f64),
}

impl Default for Init {
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Draws one initial value.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        match *self {
            Init::Uniform { low, high } => {
                if high > low {
                    rng.gen_range(low..high)
                } else {
                    low
                }
            }
            Init::Normal { mean, std } => {
                let z: f64 = StandardNormal.sample(rng);
                mean + std * z
            }
            Init::Constant(value) => value,
        }
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
