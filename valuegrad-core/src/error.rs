use thiserror::Error;

/// Custom error type for the valuegrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ValueGradError {
    /// An operand was supplied where the operation cannot differentiate through it,
    /// e.g. a `Value` used as the exponent of `pow`.
    #[error("Invalid operand for {operation}: {reason}")]
    InvalidOperand { operation: String, reason: String },

    #[error("In-place modification error during {operation}: {reason}")]
    InplaceModification { operation: String, reason: String },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
