use log::{debug, trace, warn};

use crate::autograd::graph::topological_sort;
use crate::value::Value;

impl Value {
    /// Performs the backward pass starting from this node.
    ///
    /// Seeds this node's gradient with `1.0`, orders the reachable graph topologically and
    /// runs every node's backward rule once, from this node down to the leaves. Afterwards
    /// each reachable node's `grad()` holds d(self)/d(node).
    ///
    /// Gradients are accumulated, not reset: running a second pass over the same graph
    /// without [`zero_grad_graph`](Value::zero_grad_graph) adds to the previous results.
    pub fn backward(&self) {
        let sorted_nodes = topological_sort(self);
        debug!(
            "backward: {} node(s) reachable from root '{}'",
            sorted_nodes.len(),
            self.op_tag()
        );

        {
            let mut guard = self.write_data();
            if guard.grad != 0.0 {
                warn!(
                    "backward: root gradient was {} before seeding; previous gradients are kept and will accumulate",
                    guard.grad
                );
            }
            guard.grad = 1.0;
        }

        for node in sorted_nodes.iter().rev() {
            node.propagate();
        }
    }

    /// Resets this node's gradient to zero.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    /// Resets the gradient of every node reachable from this one, including itself.
    pub fn zero_grad_graph(&self) {
        for node in topological_sort(self) {
            node.zero_grad();
        }
    }

    /// Adds `delta` to this node's gradient.
    pub(crate) fn acc_grad(&self, delta: f64) {
        self.write_data().grad += delta;
    }

    /// Runs this node's backward rule with its current (fully accumulated) gradient.
    ///
    /// The read guard on this node stays alive while operands are updated; operands are
    /// always distinct nodes since the graph has no self-loops.
    pub(crate) fn propagate(&self) {
        let guard = self.read_data();
        trace!(
            "propagate: op '{}' data={} grad={}",
            guard.grad_fn.tag(),
            guard.data,
            guard.grad
        );
        guard.grad_fn.backward(guard.data, guard.grad);
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
