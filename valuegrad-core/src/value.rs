// valuegrad-core/src/value.rs
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::autograd::{BackwardOp, NodeId};
use crate::value_data::ValueData;

mod accessors;
mod autograd_methods;
mod debug;
mod operators;

/// A scalar node of the computation graph.
///
/// `Value` is a cheap handle: cloning it clones an `Rc`, so every clone refers to the
/// same node, and gradients accumulated through one handle are visible through all of
/// them. Nodes are created either from a number (a leaf) or by applying an operation to
/// existing nodes, which records the operands and the backward rule in the new node.
///
/// ```
/// use valuegrad_core::Value;
///
/// let x = Value::new(3.0);
/// let y = &(&x * &x) + &x;
/// y.backward();
/// assert_eq!(y.data(), 12.0);
/// assert_eq!(x.grad(), 7.0);
/// ```
#[derive(Clone)]
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node wrapping `data`, with a zero gradient.
    pub fn new(data: f64) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::leaf(data))),
        }
    }

    /// Creates a labelled leaf node. The label is only used for display.
    pub fn with_label(data: f64, label: impl Into<String>) -> Self {
        let value = Value::new(data);
        value.write_data().label = Some(label.into());
        value
    }

    /// Creates the output node of an operation.
    pub(crate) fn from_op(data: f64, grad_fn: BackwardOp) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::derived(data, grad_fn))),
        }
    }

    /// Immutable access to the node payload. Drop the guard promptly.
    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    /// Mutable access to the node payload. Drop the guard promptly.
    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }

    /// Identity of the underlying node, shared by all clones of this handle.
    pub fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Returns `true` if both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl From<f32> for Value {
    fn from(data: f32) -> Self {
        Value::new(f64::from(data))
    }
}

impl From<i32> for Value {
    fn from(data: i32) -> Self {
        Value::new(f64::from(data))
    }
}

/// Lets operations take `&Value` wherever they take `impl Into<Value>`.
impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}
