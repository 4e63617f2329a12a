use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use crate::error::ValueGradError;
use crate::value::Value;

/// Number of random operand tuples drawn per sampled gradient check.
pub(crate) const SAMPLES: usize = 20;

/// Draws `SAMPLES` operand tuples of length `arity` from `range`, seeded for reproducibility.
pub(crate) fn sample_operands(seed: u64, arity: usize, range: Range<f64>) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..SAMPLES)
        .map(|_| (0..arity).map(|_| rng.gen_range(range.clone())).collect())
        .collect()
}

/// Runs `check_grad` with the default configuration and panics with context on failure.
pub(crate) fn assert_grad_check<F>(func: F, inputs: &[f64])
where
    F: Fn(&[Value]) -> Result<Value, ValueGradError>,
{
    let result = check_grad(func, inputs, &GradCheckConfig::default());
    assert!(
        result.is_ok(),
        "Gradient check failed at inputs {:?}: {:?}",
        inputs,
        result.err()
    );
}
