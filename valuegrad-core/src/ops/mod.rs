//! # Scalar Operations Module (`ops`)
//!
//! Every differentiable operation of the engine lives here, grouped by kind.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (`add_op`, `tanh_op`, ...) that
//!   computes the forward value and records the matching
//!   [`BackwardOp`](crate::autograd::BackwardOp) variant in the output node.
//! - **`_backward` Functions:** The local derivative of each primitive, called by
//!   `BackwardOp::backward` during the backward pass. They only ever add into operand
//!   gradients.
//! - **`Value` methods:** Each file also adds the method form (`x.add(y)`, `x.tanh()`).
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, pow (primitives) and neg, sub, div (composed from them).
//! - [`math_elem`]: exp.
//! - [`activation`]: tanh, relu, sigmoid.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::{relu_op, sigmoid_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, powf_op, sub_op, Exponent};
pub use math_elem::exp_op;
