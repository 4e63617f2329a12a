use crate::error::ValueGradError;
use crate::value::Value;
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ValueGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

impl From<ValueGradError> for GradCheckError {
    fn from(err: ValueGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Step size and tolerances used by [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Half-width of the central difference, `(f(x+eps) - f(x-eps)) / 2eps`.
    pub epsilon: f64,
    /// Absolute tolerance; differences below it always pass.
    pub abs_tolerance: f64,
    /// Tolerance relative to the larger magnitude of the two gradients.
    pub rel_tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            abs_tolerance: 1e-6,
            rel_tolerance: 1e-6,
        }
    }
}

/// Checks analytical gradients against numerical gradients using central finite differences.
///
/// `func` receives one fresh leaf per entry of `inputs` and builds an output node from them.
/// The analytical gradient of the output with respect to each leaf (from `backward()`) must
/// agree with `(f(x_i + eps) - f(x_i - eps)) / (2 * eps)` within the configured tolerances.
///
/// # Errors
/// * `ForwardPassError` if `func` fails for the original or a perturbed input.
/// * `NumericalGradNaNOrInfinite` / `AnalyticalGradNaNOrInfinite` if either side is not finite.
/// * `GradientMismatch` for the first input whose gradients disagree.
pub fn check_grad<F>(func: F, inputs: &[f64], config: &GradCheckConfig) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ValueGradError>,
{
    // --- 1. Forward and backward pass on fresh leaves ---
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves)?;
    output.backward();
    let analytical_grads: Vec<f64> = leaves.iter().map(Value::grad).collect();

    let evaluate = |point: Vec<f64>| -> Result<f64, GradCheckError> {
        let perturbed: Vec<Value> = point.into_iter().map(Value::new).collect();
        Ok(func(&perturbed)?.data())
    };

    // --- 2. Compare against the central difference, one input at a time ---
    for (input_index, &analytical_grad) in analytical_grads.iter().enumerate() {
        let mut plus = inputs.to_vec();
        plus[input_index] += config.epsilon;
        let mut minus = inputs.to_vec();
        minus[input_index] -= config.epsilon;

        let loss_plus = evaluate(plus)?;
        let loss_minus = evaluate(minus)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * config.epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = config.abs_tolerance,
            max_relative = config.rel_tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
        debug!(
            "check_grad: input {} ok (analytical={}, numerical={}, diff={:e})",
            input_index, analytical_grad, numerical_grad, difference
        );
    }

    Ok(())
}
