// valuegrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::ValueGradError;
use crate::value::Value;

/// Exponent argument of [`pow_op`].
///
/// Only constants can be differentiated through. `Node` exists so that passing a
/// `Value` as the exponent is a reported error rather than a silent conversion.
#[derive(Debug, Clone)]
pub enum Exponent {
    Constant(f64),
    Node(Value),
}

impl From<f64> for Exponent {
    fn from(exponent: f64) -> Self {
        Exponent::Constant(exponent)
    }
}

impl From<f32> for Exponent {
    fn from(exponent: f32) -> Self {
        Exponent::Constant(f64::from(exponent))
    }
}

impl From<i32> for Exponent {
    fn from(exponent: i32) -> Self {
        Exponent::Constant(f64::from(exponent))
    }
}

impl From<Value> for Exponent {
    fn from(exponent: Value) -> Self {
        Exponent::Node(exponent)
    }
}

impl From<&Value> for Exponent {
    fn from(exponent: &Value) -> Self {
        Exponent::Node(exponent.clone())
    }
}

/// Raises `base` to a constant power: `base ** exponent`.
///
/// Backward: `base` receives `exponent * base^(exponent - 1) * grad`. No special case
/// is made for `base == 0` with a negative or fractional exponent; the result follows
/// IEEE-754 (`inf` / `NaN`).
///
/// # Errors
/// Returns `ValueGradError::InvalidOperand` if `exponent` is a `Value`. Nothing is
/// created and no node is modified in that case.
pub fn pow_op(base: &Value, exponent: impl Into<Exponent>) -> Result<Value, ValueGradError> {
    match exponent.into() {
        Exponent::Constant(exponent) => Ok(powf_op(base, exponent)),
        Exponent::Node(node) => Err(ValueGradError::InvalidOperand {
            operation: "pow".to_string(),
            reason: format!(
                "exponent must be a numeric constant, got a graph node with value {}",
                node.data()
            ),
        }),
    }
}

/// Infallible form of [`pow_op`] for a constant exponent.
pub fn powf_op(base: &Value, exponent: f64) -> Value {
    let data = base.data().powf(exponent);
    Value::from_op(
        data,
        BackwardOp::Pow {
            base: base.clone(),
            exponent,
        },
    )
}

pub(crate) fn pow_backward(base: &Value, exponent: f64, grad_output: f64) {
    let local = exponent * base.data().powf(exponent - 1.0);
    base.acc_grad(local * grad_output);
}

impl Value {
    /// `self ** exponent`.
    ///
    /// # Errors
    /// `ValueGradError::InvalidOperand` when `exponent` is a `Value`.
    pub fn pow(&self, exponent: impl Into<Exponent>) -> Result<Value, ValueGradError> {
        pow_op(self, exponent)
    }

    /// `self ** exponent` for a constant exponent.
    pub fn powf(&self, exponent: f64) -> Value {
        powf_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
