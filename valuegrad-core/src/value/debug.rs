use std::fmt;

use crate::value::Value;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Delegate to the node payload, which summarises operands instead of printing them.
        write!(f, "Value({:?})", &*self.read_data())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        match &guard.label {
            Some(label) => write!(f, "Value({}: data={}, grad={})", label, guard.data, guard.grad),
            None => write!(f, "Value(data={}, grad={})", guard.data, guard.grad),
        }
    }
}
