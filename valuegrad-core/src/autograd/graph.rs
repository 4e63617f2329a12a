use std::cell::RefCell;
use std::collections::HashSet;

use crate::value::Value;
use crate::value_data::ValueData;

/// Identity of a node in the computation graph: the address of its shared `RefCell`.
///
/// Stable for as long as any `Value` handle to the node is alive, which the traversal
/// guarantees by holding clones of every node it visits.
pub type NodeId = *const RefCell<ValueData>;

/// Builds a topological order of the graph reachable from `root`.
///
/// Every node appears after all of its operands (leaves first, `root` last), so the
/// backward pass walks the returned vector in reverse. Each node appears exactly once,
/// even when it is shared by several consumers.
///
/// The depth-first post-order is driven by an explicit stack, so graph depth is not
/// limited by the call stack.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list = Vec::new();
    // (node, operands already scheduled)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        let operands = node.operands();
        stack.push((node, true));
        // Reversed so that operands are visited in argument order.
        for operand in operands.into_iter().rev() {
            if !visited.contains(&operand.node_id()) {
                stack.push((operand, false));
            }
        }
    }

    sorted_list
}

/// Snapshot of the graph reachable from a root, for debugging and display.
#[derive(Debug, Clone)]
pub struct GraphTrace {
    /// Reachable nodes in topological order (leaves first).
    pub nodes: Vec<Value>,
    /// `(operand, consumer)` pairs, one per operand slot.
    pub edges: Vec<(Value, Value)>,
}

/// Collects every node reachable from `root` together with its operand edges.
pub fn trace(root: &Value) -> GraphTrace {
    let nodes = topological_sort(root);
    let edges = nodes
        .iter()
        .flat_map(|node| {
            node.operands()
                .into_iter()
                .map(move |operand| (operand, node.clone()))
        })
        .collect();
    GraphTrace { nodes, edges }
}
