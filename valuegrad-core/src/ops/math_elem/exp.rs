// valuegrad-core/src/ops/math_elem/exp.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Computes `e^a`.
///
/// Backward: since `d(e^x)/dx = e^x`, the operand receives `output * grad`, reusing
/// the forward result instead of recomputing the exponential.
///
/// Large inputs overflow to `inf` without error.
pub fn exp_op(a: &Value) -> Value {
    let data = a.data().exp();
    Value::from_op(data, BackwardOp::Exp { input: a.clone() })
}

pub(crate) fn exp_backward(input: &Value, output: f64, grad_output: f64) {
    input.acc_grad(output * grad_output);
}

impl Value {
    /// `e^self`.
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
