use log::debug;
use valuegrad_core::{Value, ValueGradError};

/// The base trait for all network building blocks (neurons, layers, whole networks).
///
/// Parameters are returned as `Value` handles: they share the underlying nodes, so
/// reading `grad()` or calling `set_data` on a returned handle acts on the module itself.
pub trait Module: std::fmt::Debug {
    /// What one forward pass produces (a single node for a neuron, one per neuron otherwise).
    type Output;

    /// Performs a forward pass, building new graph nodes on top of the parameters.
    ///
    /// # Errors
    /// Returns `ValueGradError::DimensionMismatch` if `inputs` does not have the length
    /// the module was built for.
    fn forward(&self, inputs: &[Value]) -> Result<Self::Output, ValueGradError>;

    /// Returns all learnable parameters, including those of sub-modules, in a stable order.
    fn parameters(&self) -> Vec<Value>;

    /// Returns the parameters along with hierarchical names such as `layer0.neuron2.w1`.
    /// The order matches [`parameters`](Module::parameters).
    fn named_parameters(&self) -> Vec<(String, Value)>;

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}

/// Checks that a forward pass received `expected` inputs.
pub(crate) fn check_input_len(expected: usize, inputs: &[Value]) -> Result<(), ValueGradError> {
    if inputs.len() != expected {
        return Err(ValueGradError::DimensionMismatch {
            expected,
            actual: inputs.len(),
        });
    }
    Ok(())
}

/// Prefixes every name in `named` with `prefix`.
pub(crate) fn prefixed(prefix: &str, named: Vec<(String, Value)>) -> Vec<(String, Value)> {
    named
        .into_iter()
        .map(|(name, param)| (format!("{}.{}", prefix, name), param))
        .collect()
}

pub(crate) fn log_built(kind: &str, nin: usize, nout: usize, num_parameters: usize) {
    debug!(
        "{}: built {} -> {} with {} parameter(s)",
        kind, nin, nout, num_parameters
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    // Scales its single input by a learnable factor.
    #[derive(Debug)]
    struct MockModule {
        scale: Value,
    }

    impl Module for MockModule {
        type Output = Value;

        fn forward(&self, inputs: &[Value]) -> Result<Value, ValueGradError> {
            check_input_len(1, inputs)?;
            Ok(&inputs[0] * &self.scale)
        }

        fn parameters(&self) -> Vec<Value> {
            vec![self.scale.clone()]
        }

        fn named_parameters(&self) -> Vec<(String, Value)> {
            vec![("scale".to_string(), self.scale.clone())]
        }
    }

    #[test]
    fn test_provided_methods() -> Result<(), ValueGradError> {
        let module = MockModule {
            scale: Value::new(2.0),
        };
        assert_eq!(module.num_parameters(), 1);

        let out = module.forward(&[Value::new(5.0)])?;
        out.backward();
        assert_eq!(module.parameters()[0].grad(), 5.0);

        module.zero_grad();
        assert_eq!(module.scale.grad(), 0.0);
        Ok(())
    }

    #[test]
    fn test_parameters_share_nodes() {
        let module = MockModule {
            scale: Value::new(2.0),
        };
        let params = module.parameters();
        params[0].set_data(3.0).unwrap();
        assert_eq!(module.scale.data(), 3.0);
        assert!(module.named_parameters()[0].1.ptr_eq(&module.scale));
    }

    #[test]
    fn test_input_length_is_checked() {
        let module = MockModule {
            scale: Value::new(2.0),
        };
        let err = module.forward(&[]).unwrap_err();
        assert_eq!(
            err,
            ValueGradError::DimensionMismatch {
                expected: 1,
                actual: 0
            }
        );
    }
}
