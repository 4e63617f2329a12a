use crate::ops::arithmetic::mul::mul_op;
use crate::ops::arithmetic::pow::powf_op;
use crate::value::Value;

/// Divides two nodes: `a * b^-1`.
///
/// Composed from [`mul_op`] and [`powf_op`]; gradients are inherited from them.
/// Division by a zero-valued node yields `inf`/`NaN` as in IEEE-754.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &powf_op(b, -1.0))
}

impl Value {
    /// `self / other`. Numbers are wrapped as leaves.
    pub fn div(&self, other: impl Into<Value>) -> Value {
        div_op(self, &other.into())
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
