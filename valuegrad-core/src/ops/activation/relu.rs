use crate::autograd::BackwardOp;
use crate::value::Value;

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `x` if `x > 0`, else `0`.
///
/// Backward: the operand receives `grad` where the output is strictly positive and
/// nothing otherwise, so the gradient at exactly `0` is `0`.
pub fn relu_op(a: &Value) -> Value {
    let x = a.data();
    let data = if x > 0.0 { x } else { 0.0 };
    Value::from_op(data, BackwardOp::Relu { input: a.clone() })
}

// --- Backward Operation ---

pub(crate) fn relu_backward(input: &Value, output: f64, grad_output: f64) {
    let mask = if output > 0.0 { 1.0 } else { 0.0 };
    input.acc_grad(mask * grad_output);
}

impl Value {
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

// --- Tests ---
