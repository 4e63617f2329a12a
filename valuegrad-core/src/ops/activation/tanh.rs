use crate::autograd::BackwardOp;
use crate::value::Value;

/// Applies the hyperbolic tangent, `(e^{2x} - 1) / (e^{2x} + 1)`.
///
/// The forward value uses `f64::tanh`, which agrees with the closed form and stays
/// finite (saturating at +/-1) where `e^{2x}` would overflow.
///
/// Backward: the operand receives `(1 - output^2) * grad`.
pub fn tanh_op(a: &Value) -> Value {
    let data = a.data().tanh();
    Value::from_op(data, BackwardOp::Tanh { input: a.clone() })
}

pub(crate) fn tanh_backward(input: &Value, output: f64, grad_output: f64) {
    input.acc_grad((1.0 - output * output) * grad_output);
}

impl Value {
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}
