//! Error type shared by `Vector` and `Matrix` operations.

use std::fmt;

/// Failure of a checked vector or matrix operation.
///
/// Every fallible operation leaves its receiver untouched when it returns one
/// of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    /// Vectors of unequal length where a uniform length is required.
    DimensionMismatch {
        /// What the operation needed
        expected: String,
        /// What it was given
        actual: String,
    },

    /// A row, column or component index outside `0..bound`.
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Exclusive upper bound
        bound: usize,
    },

    /// `product` operands whose inner dimensions differ.
    IncompatibleDimensions {
        /// Shape (rows, columns) of the left operand
        left: (usize, usize),
        /// Shape (rows, columns) of the right operand
        right: (usize, usize),
    },
}

impl LinalgError {
    pub(crate) fn dimension_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        LinalgError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinalgError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {expected}, got {actual}")
            }
            LinalgError::IndexOutOfRange { index, bound } => {
                write!(f, "Index out of range: {index} is not in 0..{bound}")
            }
            LinalgError::IncompatibleDimensions { left, right } => {
                write!(
                    f,
                    "Dimensions not compatible: {}x{} * {}x{}",
                    left.0, left.1, right.0, right.1
                )
            }
        }
    }
}

impl std::error::Error for LinalgError {}

/// Convenience alias for results carrying a [`LinalgError`].
pub type Result<T> = std::result::Result<T, LinalgError>;

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
