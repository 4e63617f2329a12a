// src/value_data.rs
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::rc::Rc;

use crate::autograd::BackwardOp;

/// Internal storage for a single node of the computation graph.
///
/// Holds the forward value, the gradient accumulator and the rule used to push
/// that gradient back to the operands. It is wrapped in `Rc<RefCell<ValueData>>`
/// by [`Value`](crate::Value) so that one node can be the operand of many others.
pub struct ValueData {
    /// Forward-computed payload.
    pub(crate) data: f64,
    /// Accumulated d(root)/d(self). Starts at 0.0 and only grows by `+=` during
    /// a backward pass (apart from the seed step on the root).
    pub(crate) grad: f64,
    /// Operation that produced this node, together with its operand handles.
    /// Leaf nodes hold `BackwardOp::Leaf`.
    pub(crate) grad_fn: BackwardOp,
    /// Optional human-readable name, only used for display.
    pub(crate) label: Option<String>,
}

impl ValueData {
    pub(crate) fn leaf(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            grad_fn: BackwardOp::Leaf,
            label: None,
        }
    }

    pub(crate) fn derived(data: f64, grad_fn: BackwardOp) -> Self {
        ValueData {
            data,
            grad: 0.0,
            grad_fn,
            label: None,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self.grad_fn, BackwardOp::Leaf)
    }
}

// Manual implementation of Debug: operands are summarised, not printed, so that
// formatting a node never walks the whole graph.
impl Debug for ValueData {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ValueData")
            .field("data", &self.data)
            .field("grad", &self.grad)
            .field("op", &self.grad_fn.tag())
            .field("label", &self.label)
            .field("num_operands", &self.grad_fn.inputs().len())
            .finish()
    }
}

// Releasing a node releases its operands. Left to the default glue this recurses
// once per node of an operand chain, so long chains are unwound with a worklist.
impl Drop for ValueData {
    fn drop(&mut self) {
        let mut pending = self.grad_fn.take_inputs();
        while let Some(value) = pending.pop() {
            // Only the last owner tears the node down; other owners keep it alive.
            if let Ok(cell) = Rc::try_unwrap(value.data) {
                let mut node = cell.into_inner();
                pending.extend(node.grad_fn.take_inputs());
            }
        }
    }
}
