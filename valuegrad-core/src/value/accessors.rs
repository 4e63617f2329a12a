use crate::error::ValueGradError;
use crate::value::Value;

impl Value {
    /// Forward value of the node.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Accumulated gradient of the last backward pass(es) with respect to this node.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Label of the operation that produced this node (`""` for leaves).
    pub fn op_tag(&self) -> String {
        self.read_data().grad_fn.tag()
    }

    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = Some(label.into());
    }

    /// `true` for nodes created from a number rather than by an operation.
    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }

    /// Handles to the operands this node was computed from, in argument order.
    pub fn operands(&self) -> Vec<Value> {
        self.read_data().grad_fn.inputs()
    }

    /// Replaces the payload of a leaf node, e.g. to apply a parameter update.
    ///
    /// Nodes already built on top of this leaf keep the value they were computed with;
    /// rebuild the graph to see the new value.
    ///
    /// # Errors
    /// Returns `ValueGradError::InplaceModification` if the node is the output of an
    /// operation, since its value is determined by its operands. The node is left untouched.
    pub fn set_data(&self, data: f64) -> Result<(), ValueGradError> {
        let mut guard = self.write_data();
        if !guard.is_leaf() {
            return Err(ValueGradError::InplaceModification {
                operation: "set_data".to_string(),
                reason: format!(
                    "Cannot overwrite the value of a node produced by '{}'.",
                    guard.grad_fn.tag()
                ),
            });
        }
        guard.data = data;
        Ok(())
    }
}
