// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Kernel Operation Error Handling*
//!
//! Error types for kernel operations with structured error reporting.
//!
//! The error taxonomy is deliberately small. Mathematical edge cases
//! (zero or negative scale, quantiles outside `[0, 1]`, non-finite
//! inputs) are never errors: they surface as `NaN`/`inf` elements in the
//! output, following IEEE-754 propagation through the scalar bodies, so
//! that one degenerate element cannot abort a whole-array computation.
//! The only call-time failure a kernel can report is a pair of operand
//! shapes that cannot be broadcast together.

use core::fmt;
use std::error::Error;

/// Error type for all kernel operations.
///
/// Each variant includes a contextual message string providing specific
/// details about the error condition.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Operand shapes are not broadcast-compatible.
    ///
    /// This is the only error the distribution kernels produce.
    Broadcast(String),

    /// Buffer length disagrees with the declared shape at construction.
    LengthMismatch(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::Broadcast(msg) => write!(f, "Broadcast error: {}", msg),
            KernelError::LengthMismatch(msg) => write!(f, "Length mismatch: {}", msg),
        }
    }
}

impl Error for KernelError {}

/// Creates a formatted error message for shapes that fail to broadcast.
///
/// # Arguments
/// * `fname` - Function name where the mismatch occurred
/// * `lhs` - Shape of the left-hand side operand
/// * `rhs` - Shape of the right-hand side operand
pub fn broadcast_mismatch(
    fname: &str,
    lhs: &crate::array::Shape,
    rhs: &crate::array::Shape,
) -> String {
    format!(
        "{} => shapes {} and {} are not broadcast-compatible",
        fname, lhs, rhs
    )
}

/// Creates a formatted error message for buffer/shape length mismatches.
pub fn length_mismatch(fname: &str, expected: usize, actual: usize) -> String {
    format!("{} => expected {} elements, got {}", fname, expected, actual)
}
