use crate::autograd::BackwardOp;
use crate::value::Value;

/// Adds two nodes: `a + b`.
///
/// Backward: both operands receive the output gradient unchanged.
pub fn add_op(a: &Value, b: &Value) -> Value {
    let data = a.data() + b.data();
    Value::from_op(
        data,
        BackwardOp::Add {
            lhs: a.clone(),
            rhs: b.clone(),
        },
    )
}

pub(crate) fn add_backward(lhs: &Value, rhs: &Value, grad_output: f64) {
    lhs.acc_grad(grad_output);
    rhs.acc_grad(grad_output);
}

impl Value {
    /// `self + other`. Numbers are wrapped as leaves.
    pub fn add(&self, other: impl Into<Value>) -> Value {
        add_op(self, &other.into())
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
