// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Normal Distribution Scalar Implementations** - *Broadcast Kernel Bodies*
//!
//! Scalar bodies and broadcast-loop implementations of the normal
//! distribution functions. Each `_std` function promotes nothing and
//! validates nothing: operands arrive pre-promoted as [`NdArray`]s, and
//! degenerate parameters (zero, negative or non-finite scale) flow
//! through IEEE-754 arithmetic into `NaN`/`inf` output elements. The only
//! reportable failure is a broadcast mismatch.

use std::f64::consts::PI;

use crate::array::NdArray;
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::univariate::common::std::broadcast_ternary_kernel_f64;
use crate::kernels::scientific::ndtr::{log_ndtr, ndtr, ndtri};

/// Scalar log-density of `N(loc, scale)` at `x`.
///
/// `log p(x) = -( ln(2π·scale²) + (x - loc)²/scale² ) / 2`
///
/// Computed in log-space directly rather than as `ln(pdf)` so far-tail
/// densities that underflow to zero still have finite logarithms. The
/// scale enters only squared: `scale == 0` yields `ln 0 + x/0`, which
/// combines to `-inf`/`NaN` under IEEE-754 and is returned as-is.
#[inline(always)]
fn normal_logpdf_scalar(x: f64, loc: f64, scale: f64) -> f64 {
    let var = scale * scale;
    let dev = x - loc;
    -0.5 * ((2.0 * PI * var).ln() + dev * dev / var)
}

/// Normal log-PDF over the broadcast of `(x, loc, scale)`.
#[inline(always)]
pub fn normal_logpdf_std(
    x: &NdArray,
    loc: &NdArray,
    scale: &NdArray,
) -> Result<NdArray, KernelError> {
    broadcast_ternary_kernel_f64("normal_logpdf", x, loc, scale, normal_logpdf_scalar)
}

/// Normal PDF over the broadcast of `(x, loc, scale)`.
///
/// Defined as `exp` of the log-density body, so the formula lives in one
/// place, so the two functions cannot drift apart.
#[inline(always)]
pub fn normal_pdf_std(
    x: &NdArray,
    loc: &NdArray,
    scale: &NdArray,
) -> Result<NdArray, KernelError> {
    broadcast_ternary_kernel_f64("normal_pdf", x, loc, scale, |xi, li, si| {
        normal_logpdf_scalar(xi, li, si).exp()
    })
}

/// Normal CDF over the broadcast of `(x, loc, scale)`.
///
/// Standardises each element and delegates to [`ndtr`].
#[inline(always)]
pub fn normal_cdf_std(
    x: &NdArray,
    loc: &NdArray,
    scale: &NdArray,
) -> Result<NdArray, KernelError> {
    broadcast_ternary_kernel_f64("normal_cdf", x, loc, scale, |xi, li, si| {
        ndtr((xi - li) / si)
    })
}

/// Normal log-CDF over the broadcast of `(x, loc, scale)`.
///
/// Standardises each element and delegates to [`log_ndtr`], which stays
/// finite far into the left tail where `ln(cdf)` would underflow to
/// `-inf`.
#[inline(always)]
pub fn normal_logcdf_std(
    x: &NdArray,
    loc: &NdArray,
    scale: &NdArray,
) -> Result<NdArray, KernelError> {
    broadcast_ternary_kernel_f64("normal_logcdf", x, loc, scale, |xi, li, si| {
        log_ndtr((xi - li) / si)
    })
}

/// Normal quantile (inverse CDF) over the broadcast of `(q, loc, scale)`.
///
/// `ppf(q) = ndtri(q) · scale + loc`. The domain ladder (`0 → -inf`,
/// `1 → +inf`, outside `[0, 1]` → `NaN`) belongs to [`ndtri`];
/// this layer only applies the affine transform.
#[inline(always)]
pub fn normal_quantile_std(
    q: &NdArray,
    loc: &NdArray,
    scale: &NdArray,
) -> Result<NdArray, KernelError> {
    broadcast_ternary_kernel_f64("normal_quantile", q, loc, scale, |qi, li, si| {
        ndtri(qi) * si + li
    })
}
