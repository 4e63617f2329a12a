use std::mem;

use crate::ops::activation::{relu, sigmoid, tanh};
use crate::ops::arithmetic::{add, mul, pow};
use crate::ops::math_elem::exp;
use crate::value::Value;

/// The backward rule of a node: which operation produced it and from which operands.
///
/// Every operation that creates a non-leaf [`Value`] records one of these variants in the
/// output node. During `backward()` the variant is dispatched to the operation's local
/// derivative, which adds `local_derivative * grad_output` into each operand's gradient.
///
/// Composite operations (`neg`, `sub`, `div`) have no variant of their own: they are
/// built from `Mul`, `Add` and `Pow` nodes and inherit their rules.
#[derive(Debug, Clone)]
pub enum BackwardOp {
    /// A node created directly from a number. Its backward rule is a no-op.
    Leaf,
    Add { lhs: Value, rhs: Value },
    Mul { lhs: Value, rhs: Value },
    /// `base ** exponent` with a constant exponent.
    Pow { base: Value, exponent: f64 },
    Exp { input: Value },
    Tanh { input: Value },
    Relu { input: Value },
    Sigmoid { input: Value },
}

impl BackwardOp {
    /// Distributes `grad_output` (the output node's accumulated gradient) to the operands.
    ///
    /// `output` is the forward value of the node holding this rule; several rules
    /// (`exp`, `tanh`, `sigmoid`, `relu`) express their derivative through it.
    ///
    /// Gradients are always accumulated with `+=`, so an operand consumed by several
    /// nodes (or twice by the same node, as in `x * x`) receives the sum of all
    /// contributions.
    pub fn backward(&self, output: f64, grad_output: f64) {
        match self {
            BackwardOp::Leaf => {}
            BackwardOp::Add { lhs, rhs } => add::add_backward(lhs, rhs, grad_output),
            BackwardOp::Mul { lhs, rhs } => mul::mul_backward(lhs, rhs, grad_output),
            BackwardOp::Pow { base, exponent } => pow::pow_backward(base, *exponent, grad_output),
            BackwardOp::Exp { input } => exp::exp_backward(input, output, grad_output),
            BackwardOp::Tanh { input } => tanh::tanh_backward(input, output, grad_output),
            BackwardOp::Relu { input } => relu::relu_backward(input, output, grad_output),
            BackwardOp::Sigmoid { input } => sigmoid::sigmoid_backward(input, output, grad_output),
        }
    }

    /// Returns the operands that participated in the forward operation.
    ///
    /// The order matches the operation's argument order. A value used twice
    /// (e.g. `x * x`) appears twice.
    pub fn inputs(&self) -> Vec<Value> {
        match self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs } => {
                vec![lhs.clone(), rhs.clone()]
            }
            BackwardOp::Pow { base, .. } => vec![base.clone()],
            BackwardOp::Exp { input }
            | BackwardOp::Tanh { input }
            | BackwardOp::Relu { input }
            | BackwardOp::Sigmoid { input } => vec![input.clone()],
        }
    }

    /// Detaches the operands, leaving `Leaf` behind. Used when a node is released.
    pub(crate) fn take_inputs(&mut self) -> Vec<Value> {
        match mem::replace(self, BackwardOp::Leaf) {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs } => vec![lhs, rhs],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Exp { input }
            | BackwardOp::Tanh { input }
            | BackwardOp::Relu { input }
            | BackwardOp::Sigmoid { input } => vec![input],
        }
    }

    /// Diagnostic label of the operation (`"+"`, `"*"`, `"**2"`, `"exp"`, ...).
    /// Leaves have an empty tag.
    pub fn tag(&self) -> String {
        match self {
            BackwardOp::Leaf => String::new(),
            BackwardOp::Add { .. } => "+".to_string(),
            BackwardOp::Mul { .. } => "*".to_string(),
            BackwardOp::Pow { exponent, .. } => format!("**{}", exponent),
            BackwardOp::Exp { .. } => "exp".to_string(),
            BackwardOp::Tanh { .. } => "tanh".to_string(),
            BackwardOp::Relu { .. } => "ReLU".to_string(),
            BackwardOp::Sigmoid { .. } => "sigmoid".to_string(),
        }
    }
}
