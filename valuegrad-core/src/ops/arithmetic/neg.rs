use crate::ops::arithmetic::mul::mul_op;
use crate::value::Value;

/// Negates a node: `a * -1`.
///
/// Built on [`mul_op`] with a `-1.0` leaf, so the backward rule is multiplication's.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, &Value::new(-1.0))
}

impl Value {
    /// `-self`.
    pub fn neg(&self) -> Value {
        neg_op(self)
    }
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
