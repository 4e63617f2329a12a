use crate::ops::arithmetic::add::add_op;
use crate::ops::arithmetic::neg::neg_op;
use crate::value::Value;

/// Subtracts two nodes: `a + (-b)`.
///
/// Composed from [`add_op`] and [`neg_op`]; gradients are inherited from them.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}

impl Value {
    /// `self - other`. Numbers are wrapped as leaves.
    pub fn sub(&self, other: impl Into<Value>) -> Value {
        sub_op(self, &other.into())
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
