// ============================================================================
// Point Errors
// Error types for run-time checked coordinate access
// ============================================================================

use std::fmt;

/// Errors that can occur when a point is accessed or built at run time.
///
/// Everything else (wrong arity, out-of-range constant index, non-numeric
/// coordinate type) is rejected by the compiler and never reaches here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointError {
    /// Run-time coordinate index was negative or not below the dimension
    IndexOutOfRange,
    /// Slice length does not match the point dimension
    DimensionMismatch {
        /// Dimension of the target point type
        expected: usize,
        /// Length of the supplied slice
        actual: usize,
    },
}

impl fmt::Display for PointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointError::IndexOutOfRange => write!(f, "Point coordinate index is out of range"),
            PointError::DimensionMismatch { expected, actual } => write!(
                f,
                "dimension mismatch: expected {} coordinates, got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for PointError {}

/// Result type alias for point operations
pub type PointResult<T> = Result<T, PointError>;
