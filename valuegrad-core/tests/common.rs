use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use valuegrad_core::{check_grad, GradCheckConfig, Value, ValueGradError};

// Helpers shared by the integration tests of this crate.
// Added allow(dead_code) because not every test binary uses every helper.

#[allow(dead_code)]
pub(crate) fn init_logger() {
    // Attempt to initialize env_logger. If it fails (e.g., already initialized), that's okay.
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub(crate) fn seeded_samples(seed: u64, count: usize, arity: usize, low: f64, high: f64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (0..arity).map(|_| rng.gen_range(low..high)).collect())
        .collect()
}

#[allow(dead_code)]
pub(crate) fn assert_gradients_match<F>(name: &str, func: F, inputs: &[f64])
where
    F: Fn(&[Value]) -> Result<Value, ValueGradError>,
{
    if let Err(e) = check_grad(func, inputs, &GradCheckConfig::default()) {
        panic!("{}: gradient check failed at {:?}: {}", name, inputs, e);
    }
}
