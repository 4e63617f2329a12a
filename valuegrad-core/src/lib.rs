//! # valuegrad-core
//!
//! A reverse-mode automatic differentiation engine over scalar values.
//!
//! Build an expression from [`Value`] nodes with the operations in [`ops`] (or the
//! overloaded `+ - * /` operators), then call [`Value::backward`] on the output to fill
//! in `grad()` on every node it depends on.

pub mod autograd;
pub mod error;
pub mod ops;
pub mod value;
pub mod value_data;

pub(crate) mod utils;

// Re-exports so the common types are available as `valuegrad_core::Value` etc.
pub use autograd::grad_check::{check_grad, GradCheckConfig, GradCheckError};
pub use error::ValueGradError;
pub use ops::Exponent;
pub use value::Value;
// Re-export traits implemented by `Value` (Zero, One, and Pow<f64> for `&Value` only)
pub use num_traits;
