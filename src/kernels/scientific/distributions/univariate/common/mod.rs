// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Common Distribution Utilities** - *Shared Kernel Drivers and Test Helpers*
//!
//! Kernel drivers shared by the univariate distribution implementations:
//! broadcast resolution of the `(x, loc, scale)` operand triple and the
//! element-wise evaluation loops (dense fast paths plus the general
//! strided walk). Distribution modules supply a scalar body closure; the
//! drivers own iteration order and output assembly, so every distribution
//! broadcasts identically.

/// Scalar implementations of the common kernel drivers.
pub mod std;

// Common test helpers

/// Assert absolute difference ≤ `tol`.
#[cfg(test)]
pub fn assert_close(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() < tol,
        "assert_close failed: {} vs {} (tol={})",
        a,
        b,
        tol
    );
}
