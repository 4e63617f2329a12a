use crate::autograd::BackwardOp;
use crate::value::Value;

/// Applies the logistic function `1 / (1 + e^-x)`.
///
/// Backward: the operand receives `output * (1 - output) * grad`.
pub fn sigmoid_op(a: &Value) -> Value {
    let data = 1.0 / (1.0 + (-a.data()).exp());
    Value::from_op(data, BackwardOp::Sigmoid { input: a.clone() })
}

pub(crate) fn sigmoid_backward(input: &Value, output: f64, grad_output: f64) {
    input.acc_grad(output * (1.0 - output) * grad_output);
}

impl Value {
    pub fn sigmoid(&self) -> Value {
        sigmoid_op(self)
    }
}
