use crate::autograd::BackwardOp;
use crate::value::Value;

/// Multiplies two nodes: `a * b`.
///
/// Backward: `a` receives `b * grad`, `b` receives `a * grad`.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let data = a.data() * b.data();
    Value::from_op(
        data,
        BackwardOp::Mul {
            lhs: a.clone(),
            rhs: b.clone(),
        },
    )
}

pub(crate) fn mul_backward(lhs: &Value, rhs: &Value, grad_output: f64) {
    // Read both values before writing: for `x * x` lhs and rhs are the same node.
    let lhs_data = lhs.data();
    let rhs_data = rhs.data();
    lhs.acc_grad(rhs_data * grad_output);
    rhs.acc_grad(lhs_data * grad_output);
}

impl Value {
    /// `self * other`. Numbers are wrapped as leaves.
    pub fn mul(&self, other: impl Into<Value>) -> Value {
        mul_op(self, &other.into())
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
