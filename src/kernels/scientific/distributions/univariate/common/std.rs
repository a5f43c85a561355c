// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Scalar Kernel Drivers** - *Broadcast-Aware Element-Wise Evaluation*
//!
//! The evaluation loops behind every distribution kernel. Three paths:
//!
//! 1. [`dense_univariate_kernel_f64`]: `loc`/`scale` are scalars, `x`
//!    already has the output shape: a tight loop over one slice.
//! 2. [`dense_ternary_kernel_f64`]: all three operands share the output
//!    shape: one zipped pass, no index arithmetic.
//! 3. [`strided_ternary_kernel_f64`]: the general case, an odometer walk
//!    over the broadcast shape with per-operand broadcast strides
//!    (stride 0 re-reads an expanded axis instead of materialising it).
//!
//! All paths are pure element maps: no reordering, no accumulation, so
//! results are identical between paths for the same operands.

use crate::array::{NdArray, Shape};
use crate::errors::{broadcast_mismatch, KernelError};

/// Resolves the broadcast shape of the `(x, loc, scale)` operand triple.
///
/// Fails with [`KernelError::Broadcast`] carrying the kernel name when any
/// pair of shapes is irreconcilable.
#[inline(always)]
pub fn resolve_broadcast(
    fname: &str,
    x: &Shape,
    loc: &Shape,
    scale: &Shape,
) -> Result<Shape, KernelError> {
    let xl = x
        .broadcast(loc)
        .map_err(|_| KernelError::Broadcast(broadcast_mismatch(fname, x, loc)))?;
    xl.broadcast(scale)
        .map_err(|_| KernelError::Broadcast(broadcast_mismatch(fname, &xl, scale)))
}

/// Dense kernel helper for scalar `loc`/`scale`.
///
/// `x` must already have the output shape; the parameters are bound into
/// `scalar_body` by the caller.
#[inline(always)]
pub fn dense_univariate_kernel_f64<FScalar>(x: &[f64], scalar_body: FScalar) -> Vec<f64>
where
    FScalar: Fn(f64) -> f64,
{
    let mut out = Vec::with_capacity(x.len());
    for &xi in x {
        out.push(scalar_body(xi));
    }
    out
}

/// Dense kernel helper for operands that share one shape.
#[inline(always)]
pub fn dense_ternary_kernel_f64<FScalar>(
    x: &[f64],
    loc: &[f64],
    scale: &[f64],
    scalar_body: FScalar,
) -> Vec<f64>
where
    FScalar: Fn(f64, f64, f64) -> f64,
{
    debug_assert!(x.len() == loc.len() && x.len() == scale.len());
    let mut out = Vec::with_capacity(x.len());
    for i in 0..x.len() {
        out.push(scalar_body(x[i], loc[i], scale[i]));
    }
    out
}

/// General broadcast kernel: odometer walk over the output shape.
///
/// Each operand contributes a stride vector from
/// [`Shape::broadcast_strides`]; expanded axes carry stride 0, so the
/// walk revisits the broadcast element without copying. Offsets are
/// maintained incrementally (one add per axis step, one subtract per
/// carry) rather than re-derived from the index vector.
#[inline(always)]
pub fn strided_ternary_kernel_f64<FScalar>(
    x: &NdArray,
    loc: &NdArray,
    scale: &NdArray,
    out_shape: &Shape,
    scalar_body: FScalar,
) -> Vec<f64>
where
    FScalar: Fn(f64, f64, f64) -> f64,
{
    let n = out_shape.num_elements();
    let dims = out_shape.dims();
    let rank = out_shape.rank();

    let xs = x.shape().broadcast_strides(out_shape);
    let ls = loc.shape().broadcast_strides(out_shape);
    let ss = scale.shape().broadcast_strides(out_shape);

    let xd = x.data();
    let ld = loc.data();
    let sd = scale.data();

    let mut out = Vec::with_capacity(n);
    let mut idx = vec![0usize; rank];
    let (mut xo, mut lo, mut so) = (0usize, 0usize, 0usize);

    for _ in 0..n {
        out.push(scalar_body(xd[xo], ld[lo], sd[so]));

        for ax in (0..rank).rev() {
            idx[ax] += 1;
            xo += xs[ax];
            lo += ls[ax];
            so += ss[ax];
            if idx[ax] < dims[ax] {
                break;
            }
            // carry: rewind this axis and advance the next one out
            idx[ax] = 0;
            xo -= xs[ax] * dims[ax];
            lo -= ls[ax] * dims[ax];
            so -= ss[ax] * dims[ax];
        }
    }
    out
}

/// Evaluates `scalar_body` element-wise over the broadcast of the operand
/// triple, choosing the cheapest evaluation path.
///
/// This is the single entry point the distribution kernels call; the only
/// failure it can report is a broadcast mismatch.
#[inline(always)]
pub fn broadcast_ternary_kernel_f64<FScalar>(
    fname: &str,
    x: &NdArray,
    loc: &NdArray,
    scale: &NdArray,
    scalar_body: FScalar,
) -> Result<NdArray, KernelError>
where
    FScalar: Fn(f64, f64, f64) -> f64,
{
    let out_shape = resolve_broadcast(fname, x.shape(), loc.shape(), scale.shape())?;

    // Scalar-parameter fast path
    if x.shape() == &out_shape && loc.len() == 1 && scale.len() == 1 {
        let l = loc.data()[0];
        let s = scale.data()[0];
        let out = dense_univariate_kernel_f64(x.data(), |xi| scalar_body(xi, l, s));
        return NdArray::from_shape_vec(out_shape, out);
    }

    // Uniform-shape fast path
    if x.shape() == &out_shape && loc.shape() == &out_shape && scale.shape() == &out_shape {
        let out = dense_ternary_kernel_f64(x.data(), loc.data(), scale.data(), scalar_body);
        return NdArray::from_shape_vec(out_shape, out);
    }

    let out = strided_ternary_kernel_f64(x, loc, scale, &out_shape, scalar_body);
    NdArray::from_shape_vec(out_shape, out)
}
