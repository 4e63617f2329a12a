//! # Autograd
//!
//! Reverse-mode differentiation over the scalar computation graph.
//!
//! - [`backward_op`]: the per-node backward rule (`BackwardOp`).
//! - [`graph`]: node identity, topological ordering and graph inspection.
//! - [`grad_check`]: finite-difference verification of analytical gradients.
//!
//! The entry point of a backward pass is [`Value::backward`](crate::Value::backward).

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use graph::{topological_sort, trace, GraphTrace, NodeId};
