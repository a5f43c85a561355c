// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Mathematical Constants Module** - *High-Precision Constants for the Normal Kernels*
//!
//! Mathematical constants for the normal-distribution kernels with
//! hard-coded precision, plus the coefficient tables of Acklam's inverse
//! normal CDF approximation.

// ******** Constants ***********************************************/
/// The square root of 2: √2 ≈ 1.414213562373095.
///
/// Used for every conversion between the error-function and
/// standard-normal domains: `Φ(z) = ½·erfc(−z/√2)`.
pub(crate) const SQRT_2: f64 = 1.4142135623730951_f64;

/// The square root of 2π: √(2π) ≈ 2.506628274631000.
///
/// Normalisation constant of the standard normal density.
pub(crate) const SQRT_2PI: f64 = 2.5066282746310002_f64;

/// The square root of π: √π ≈ 1.772453850905516.
///
/// Appears in the derivative of `erfc`, used by the Newton refinement in
/// `erfc_inv`.
pub(crate) const SQRT_PI: f64 = 1.7724538509055159_f64;

/// Half of the natural logarithm of 2π: ½ln(2π) ≈ 0.918938533204673.
///
/// The log-space normalisation constant of the standard normal density:
/// `ln φ(z) = -z²/2 - ½ln(2π)`.
pub(crate) const HALF_LN_2PI: f64 = 0.918_938_533_204_672_741_780_329_736_406;

/// Acklam's inverse normal CDF approximation coefficients (numerator polynomial).
///
/// High-precision rational function coefficients for computing the inverse
/// standard normal cumulative distribution function Φ⁻¹(p) using Peter John
/// Acklam's minimax rational approximation, covering the central
/// probability region `P_LOW < p < 1 - P_LOW`.
pub(crate) const A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];

/// Acklam's inverse normal CDF approximation coefficients (denominator polynomial).
///
/// Denominator coefficients paired with the `A` array to form the complete
/// central-region rational approximation.
pub(crate) const B: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];

/// Acklam's inverse normal CDF approximation coefficients (tail region numerator).
///
/// Rational function coefficients for quantiles in the tail regions
/// `p < P_LOW` or `p > 1 - P_LOW`, i.e. beyond roughly ±2σ.
pub(crate) const C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];

/// Acklam's inverse normal CDF approximation coefficients (tail region denominator).
///
/// Denominator polynomial completing the tail-region rational function.
pub(crate) const D: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];

/// Lower probability threshold for Acklam's inverse normal CDF approximation.
///
/// Breakpoint separating the central rational approximation from the tail
/// approximation; corresponds to roughly -2σ. The upper breakpoint is
/// `1.0 - P_LOW` by symmetry.
pub(crate) const P_LOW: f64 = 0.02425;
