// ferrograd-core/src/error.rs

use thiserror::Error;

/// Which half of a `Function` was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Forward,
    Backward,
}

impl std::fmt::Display for Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pass::Forward => write!(f, "forward"),
            Pass::Backward => write!(f, "backward"),
        }
    }
}

/// Custom error type for the ferrograd engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum AutogradError {
    /// A `Variable` was built from a value outside the supported array family.
    #[error("{found} is not supported: Variable data must be an f64/f32 ndarray")]
    TypeError { found: String },

    /// A `Function` kind was called without a concrete forward/backward formula.
    #[error("{function}: {pass} is not implemented")]
    NotImplemented { function: String, pass: Pass },

    #[error("Variable has no data (required by {operation})")]
    MissingData { operation: String },

    #[error("len() of unsized object: data is 0-dimensional")]
    UnsizedLen,

    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Cannot broadcast shapes: {shape1:?} and {shape2:?}")]
    BroadcastError {
        shape1: Vec<usize>,
        shape2: Vec<usize>,
    },

    #[error("{function} expected {expected} value(s), got {actual}")]
    ArityMismatch {
        function: String,
        expected: usize,
        actual: usize,
    },

    #[error("{function}::backward returned {actual} gradients, but the call had {expected} inputs")]
    GradientCountMismatch {
        function: String,
        expected: usize,
        actual: usize,
    },

    #[error("Internal error: {0}")]
    InternalError(String),
}
