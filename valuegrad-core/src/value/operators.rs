use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Pow, Zero};

use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, powf_op, sub_op};
use crate::value::Value;

/// Implements a binary operator for every combination of `Value`, `&Value` and `f64`
/// operands. A literal on either side is wrapped as a leaf before calling the canonical op,
/// so `2.0 - &x` is `sub_op(Value::new(2.0), x)`.
macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<&Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(self, &rhs)
            }
        }

        impl $trait<&Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&self, rhs)
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&self, &rhs)
            }
        }

        impl $trait<f64> for &Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op_fn(self, &Value::new(rhs))
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op_fn(&self, &Value::new(rhs))
            }
        }

        impl $trait<&Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&Value::new(self), rhs)
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&Value::new(self), &rhs)
            }
        }
    };
}

impl_binary_operator!(Add, add, add_op);
impl_binary_operator!(Sub, sub, sub_op);
impl_binary_operator!(Mul, mul, mul_op);
impl_binary_operator!(Div, div, div_op);

impl Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(&self)
    }
}

/// `Pow::pow(&x, p)` through `num_traits` with a constant exponent; cannot fail.
///
/// Only implemented for `&Value`, so method-call syntax `x.pow(p)` always resolves to the
/// fallible inherent [`Value::pow`], even with `Pow` in scope.
impl Pow<f64> for &Value {
    type Output = Value;
    fn pow(self, exponent: f64) -> Value {
        powf_op(self, exponent)
    }
}

/// The additive identity is a fresh leaf holding `0.0`.
impl Zero for Value {
    fn zero() -> Self {
        Value::new(0.0)
    }

    fn is_zero(&self) -> bool {
        self.data() == 0.0
    }
}

impl One for Value {
    fn one() -> Self {
        Value::new(1.0)
    }
}

/// Sums into a chain of `+` nodes starting from a `0.0` leaf.
impl Sum for Value {
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Self {
        iter.fold(Value::zero(), |acc, v| add_op(&acc, &v))
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Self {
        iter.fold(Value::zero(), |acc, v| add_op(&acc, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValueGradError;
    use approx::assert_relative_eq;

    #[test]
    fn test_operator_combinations_match_named_ops() {
        let a = Value::new(3.0);
        let b = Value::new(-1.5);
        assert_eq!((&a + &b).data(), 1.5);
        assert_eq!((a.clone() + &b).data(), 1.5);
        assert_eq!((&a + b.clone()).data(), 1.5);
        assert_eq!((a.clone() + b.clone()).data(), 1.5);
        assert_eq!((&a - &b).data(), 4.5);
        assert_eq!((&a * &b).data(), -4.5);
        assert_relative_eq!((&a / &b).data(), -2.0, epsilon = 1e-12);
        assert_eq!((-&a).data(), -3.0);
        assert_eq!((-a.clone()).data(), -3.0);
    }

    #[test]
    fn test_reflected_literals() {
        let x = Value::new(4.0);
        assert_eq!((2.0 + &x).data(), 6.0);
        assert_eq!((&x + 2.0).data(), 6.0);
        assert_eq!((2.0 * &x).data(), 8.0);
        // literal on the left keeps its position
        assert_eq!((10.0 - &x).data(), 6.0);
        assert_eq!((&x - 10.0).data(), -6.0);
        assert_relative_eq!((2.0 / &x).data(), 0.5, epsilon = 1e-12);
        assert_relative_eq!((&x / 2.0).data(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reflected_subtraction_gradient() {
        let x = Value::new(4.0);
        let y = 10.0 - &x;
        y.backward();
        assert_eq!(x.grad(), -1.0);
    }

    #[test]
    fn test_reflected_division_gradient() {
        // d(2/x)/dx = -2/x^2
        let x = Value::new(4.0);
        let y = 2.0 / &x;
        y.backward();
        assert_relative_eq!(x.grad(), -0.125, epsilon = 1e-12);
    }

    #[test]
    fn test_num_traits_pow() {
        let x = Value::new(3.0);
        let y = Pow::pow(&x, 2.0);
        assert_eq!(y.data(), 9.0);
        assert_eq!(y.op_tag(), "**2");
        y.backward();
        assert_eq!(x.grad(), 6.0);
    }

    #[test]
    fn test_method_pow_stays_fallible_with_trait_in_scope() {
        // `Pow` is imported by `use super::*`
        let x = Value::new(3.0);
        let owned: Result<Value, ValueGradError> = x.clone().pow(2.0);
        let by_ref: Result<Value, ValueGradError> = (&x).pow(2.0);
        assert_eq!(owned.unwrap().data(), 9.0);
        assert_eq!(by_ref.unwrap().data(), 9.0);
        assert!(x.clone().pow(&x).is_err());
    }

    #[test]
    fn test_zero_one_identities() {
        let zero = Value::zero();
        let one = Value::one();
        assert!(zero.is_zero());
        assert!(!one.is_zero());
        assert!(zero.is_leaf());
        assert_eq!(one.data(), 1.0);
    }

    #[test]
    fn test_sum_over_values_and_references() {
        let xs: Vec<Value> = [1.0, 2.0, 3.5].iter().map(|&v| Value::new(v)).collect();
        let by_ref: Value = xs.iter().sum();
        assert_eq!(by_ref.data(), 6.5);
        by_ref.backward();
        for x in &xs {
            assert_eq!(x.grad(), 1.0);
        }

        let owned: Value = xs.clone().into_iter().sum();
        assert_eq!(owned.data(), 6.5);

        let empty: Value = Vec::<Value>::new().into_iter().sum();
        assert_eq!(empty.data(), 0.0);
    }
}
