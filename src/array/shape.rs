// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Shape Descriptors** - *Dimensions, Strides and Broadcasting*
//!
//! Row-major shape descriptors for [`crate::array::NdArray`], with the
//! stride and broadcasting algebra the distribution kernels evaluate over.
//!
//! Broadcasting follows the NumPy rule: dimensions are aligned from the
//! right, and each pair must either be equal or contain a `1`. A dimension
//! of size `1` is expanded by giving it stride `0`, so the same element is
//! re-read rather than copied.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{broadcast_mismatch, KernelError};

/// Describes the dimensionality of an [`crate::array::NdArray`].
///
/// Shapes are immutable once created and provide convenience methods for
/// computing strides, total element counts, and broadcast resolution.
/// Rank 0 describes a scalar holding exactly one element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Creates a new shape from the given dimensions.
    pub fn new(dims: Vec<usize>) -> Self {
        Self { dims }
    }

    /// Creates a scalar shape (rank 0).
    pub fn scalar() -> Self {
        Self { dims: vec![] }
    }

    /// Creates a 1-D shape.
    pub fn vector(len: usize) -> Self {
        Self { dims: vec![len] }
    }

    /// Creates a 2-D shape (matrix).
    pub fn matrix(rows: usize, cols: usize) -> Self {
        Self {
            dims: vec![rows, cols],
        }
    }

    /// Returns the number of dimensions (rank).
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Returns the total number of elements.
    ///
    /// For a scalar shape (rank 0), returns 1.
    pub fn num_elements(&self) -> usize {
        self.dims.iter().product()
    }

    /// Returns the dimensions as a slice.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Returns the size of a specific dimension, or `None` if out of bounds.
    pub fn dim(&self, index: usize) -> Option<usize> {
        self.dims.get(index).copied()
    }

    /// Computes row-major (C-order) strides for this shape.
    ///
    /// The stride for dimension `i` is the number of elements to skip
    /// in the flat buffer to advance one step along that dimension.
    pub fn strides(&self) -> Vec<usize> {
        let rank = self.dims.len();
        if rank == 0 {
            return vec![];
        }
        let mut strides = vec![0usize; rank];
        strides[rank - 1] = 1;
        for i in (0..rank - 1).rev() {
            strides[i] = strides[i + 1] * self.dims[i + 1];
        }
        strides
    }

    /// Returns `true` if two shapes are broadcast-compatible.
    ///
    /// Shapes are compatible when, aligning dimensions from the right,
    /// each pair is either equal or one of them is 1.
    pub fn is_broadcast_compatible(&self, other: &Shape) -> bool {
        let a = &self.dims;
        let b = &other.dims;
        let mut ai = a.len();
        let mut bi = b.len();
        while ai > 0 && bi > 0 {
            ai -= 1;
            bi -= 1;
            if a[ai] != b[bi] && a[ai] != 1 && b[bi] != 1 {
                return false;
            }
        }
        true
    }

    /// Resolves the broadcast of two shapes.
    ///
    /// The result has the rank of the higher-rank operand; each output
    /// dimension is the larger of the (right-aligned) operand pair.
    /// Fails with [`KernelError::Broadcast`] when a pair is neither equal
    /// nor expandable from 1.
    pub fn broadcast(&self, other: &Shape) -> Result<Shape, KernelError> {
        let a = &self.dims;
        let b = &other.dims;
        let rank = a.len().max(b.len());
        let mut out = vec![0usize; rank];
        for i in 0..rank {
            let da = if i < a.len() { a[a.len() - 1 - i] } else { 1 };
            let db = if i < b.len() { b[b.len() - 1 - i] } else { 1 };
            if da != db && da != 1 && db != 1 {
                return Err(KernelError::Broadcast(broadcast_mismatch(
                    "Shape::broadcast",
                    self,
                    other,
                )));
            }
            // a size-1 axis always yields to the other operand, including
            // the zero-length case: (0,) against (1,) broadcasts to (0,)
            out[rank - 1 - i] = if da == 1 { db } else { da };
        }
        Ok(Shape::new(out))
    }

    /// Computes the strides of this shape when expanded to `target`.
    ///
    /// Dimensions of size 1 (and dimensions missing on the left) get
    /// stride 0, so iterating the target shape with these strides re-reads
    /// the broadcast element instead of copying it.
    ///
    /// The caller must have resolved `target` via [`Shape::broadcast`];
    /// incompatible dimensions here are a programming error.
    pub fn broadcast_strides(&self, target: &Shape) -> Vec<usize> {
        let own = self.strides();
        let rank = target.dims.len();
        let offset = rank - self.dims.len();
        let mut out = vec![0usize; rank];
        for i in 0..self.dims.len() {
            debug_assert!(
                self.dims[i] == target.dims[offset + i] || self.dims[i] == 1,
                "broadcast_strides on unresolved target shape"
            );
            out[offset + i] = if self.dims[i] == 1 { 0 } else { own[i] };
        }
        out
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, "]")
    }
}

/// Convenience: `Shape::from(vec![2, 3])`.
impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self::new(dims)
    }
}

/// Convenience: `Shape::from(&[2, 3][..])`.
impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self::new(dims.to_vec())
    }
}
