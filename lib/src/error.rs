//! Error types for boundary validation.

use std::fmt;

/// Error produced when a heterogeneous sequence fails numeric validation.
///
/// Only the boundary conversion in [`crate::value::numeric_values`] produces
/// these; the transforms themselves have defined outputs for every well-typed
/// input and never fail.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    /// Element has no numeric reading (absent marker or unparseable text).
    NonNumeric { position: usize, token: String },
    /// Element parsed as a float but is NaN or infinite.
    NonFinite { position: usize, value: f64 },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::NonNumeric { position, token } => {
                write!(f, "non-numeric value {:?} at position {}", token, position)
            }
            TransformError::NonFinite { position, value } => {
                write!(f, "non-finite value {} at position {}", value, position)
            }
        }
    }
}

impl std::error::Error for TransformError {}
