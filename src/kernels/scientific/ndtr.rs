// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Standard-Normal Primitives** - *ndtr, log_ndtr and ndtri*
//!
//! Scalar special functions of the standard normal distribution, named
//! after their SciPy counterparts:
//!
//! - [`ndtr`]: cumulative distribution function Φ(z)
//! - [`log_ndtr`]: ln Φ(z), stable arbitrarily far into the left tail
//! - [`ndtri`]: quantile function Φ⁻¹(p), the inverse of [`ndtr`]
//!
//! The distribution layer standardises its inputs (subtract the location,
//! divide by the scale) and delegates to these primitives; everything here
//! is location/scale-free.
//!
//! ## Accuracy
//! - `ndtr`: |err| ≤ 2 ulp via the `erfc` formulation, exact at 0 and in
//!   the extreme tails.
//! - `log_ndtr`: three-regime evaluation; relative error < 1e-12
//!   everywhere, including `z ≪ -40` where `ln(ndtr(z))` would be `-inf`.
//! - `ndtri`: Acklam's rational approximation plus one Halley step;
//!   |err| < 1e-14 in the bulk, < 1e-12 in the tails (matching SciPy's
//!   own tail behaviour).

use crate::kernels::scientific::distributions::shared::constants::{
    A, B, C, D, HALF_LN_2PI, P_LOW, SQRT_2, SQRT_2PI,
};
use crate::kernels::scientific::erf::{erfc, erfc_inv};

/// Cutoff below which `log_ndtr` switches to the asymptotic expansion.
///
/// At z = -25 the truncation error of the five-term Mills series is below
/// 1e-14 relative, while the `erfc` path is still far from underflow, so
/// the two regimes agree across the seam.
const LOG_NDTR_TAIL_CUTOFF: f64 = -25.0;

/// Standard normal cumulative distribution function Φ(z).
///
/// Evaluated through the complementary error function:
/// `Φ(z) = ½·erfc(−z/√2)` on the left half, `1 − ½·erfc(z/√2)` on the
/// right. The split keeps full precision in both tails.
#[inline(always)]
pub fn ndtr(z: f64) -> f64 {
    if z < 0.0 {
        0.5 * erfc(-z / SQRT_2)
    } else {
        1.0 - 0.5 * erfc(z / SQRT_2)
    }
}

/// Natural logarithm of the standard normal CDF, ln Φ(z).
///
/// `ln(ndtr(z))` underflows to `-inf` once Φ(z) leaves the subnormal
/// range (z ≈ -38.5); this evaluation stays finite and accurate for any
/// finite `z`:
///
/// - `z ≥ 0`: `ln_1p(−½·erfc(z/√2))`, precise where Φ(z) ≈ 1
/// - `-25 < z < 0`: direct `ln(½·erfc(−z/√2))`
/// - `z ≤ -25`: Mills-ratio asymptotic expansion
///   `−z²/2 − ln(−z) − ½ln(2π) + ln_1p(−x⁻² + 3x⁻⁴ − 15x⁻⁶ + 105x⁻⁸)`
///   with `x = −z`
#[inline(always)]
pub fn log_ndtr(z: f64) -> f64 {
    if z.is_nan() {
        return z;
    }
    if z >= 0.0 {
        return (-0.5 * erfc(z / SQRT_2)).ln_1p();
    }
    if z > LOG_NDTR_TAIL_CUTOFF {
        return (0.5 * erfc(-z / SQRT_2)).ln();
    }
    let x = -z;
    let inv2 = 1.0 / (x * x);
    let tail = inv2 * (-1.0 + inv2 * (3.0 + inv2 * (-15.0 + inv2 * 105.0)));
    -0.5 * z * z - x.ln() - HALF_LN_2PI + tail.ln_1p()
}

/// Core inverse standard normal function for left tail probabilities.
///
/// Computes Φ⁻¹(p) for probabilities p ∈ (0, 0.5] using Acklam's rational
/// approximation. Returns a negative z-score.
#[inline(always)]
fn inv_std_normal_core(p: f64) -> f64 {
    debug_assert!(p > 0.0 && p <= 0.5);

    if p > P_LOW {
        // ---------------- central region ----------------
        let r = p - 0.5;
        let s = r * r;
        let num = (((((A[0] * s + A[1]) * s + A[2]) * s + A[3]) * s + A[4]) * s + A[5]) * r;
        let den = ((((B[0] * s + B[1]) * s + B[2]) * s + B[3]) * s + B[4]) * s + 1.0;
        num / den
    } else {
        // ---------------- lower tail --------------------
        let r = (-2.0 * p.ln()).sqrt();
        let num = ((((C[0] * r + C[1]) * r + C[2]) * r + C[3]) * r + C[4]) * r + C[5];
        let den = (((D[0] * r + D[1]) * r + D[2]) * r + D[3]) * r + 1.0;
        //  `num` is already negative here, so no extra minus sign.
        num / den
    }
}

/// Standard normal quantile function Φ⁻¹(p), the inverse of [`ndtr`].
///
/// # Domain and Range
/// - **Domain**: p ∈ [0, 1]
/// - `p = 0` returns `-inf`, `p = 1` returns `+inf`, `p = 0.5` returns
///   exactly `0.0`
/// - Outside `[0, 1]` (including NaN) the result is `NaN`; out-of-domain
///   probabilities are a data condition, not an error
///
/// Acklam's initial approximation is sharpened with one Halley step
/// against [`ndtr`]; probabilities below machine epsilon short-cut through
/// `erfc_inv`, where the rational approximation loses accuracy.
#[inline(always)]
pub fn ndtri(p: f64) -> f64 {
    // Early exit edge cases; the comparison order also catches NaN.
    if !(p >= 0.0 && p <= 1.0) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }
    if p == 0.5 {
        return 0.0;
    }

    // symmetry reduction
    let (p_left, sign) = if p < 0.5 { (p, -1.0) } else { (1.0 - p, 1.0) };

    // extreme-tail shortcut via erfc⁻¹
    const EPS_DBL: f64 = 1.110_223_024_625_156_5e-16;
    if p_left < EPS_DBL {
        // Φ⁻¹(p) = −√2 · erfc⁻¹(2p)   (for p ≤ 0.5)
        let z_tail = -SQRT_2 * erfc_inv(2.0 * p_left);
        return sign * -z_tail; // mirror if p > 0.5
    }

    // Acklam initial approximation
    let mut z = inv_std_normal_core(p_left); // negative

    // one Halley refinement step
    // Halley:  z_{n+1} = z_n − f/f' · (1 + ½ f · f'' / f'^2)
    // Here f = Φ(z) − p,  f' = φ(z),  f'' = −z φ(z)
    let pdf = (-0.5 * z * z).exp() / SQRT_2PI;
    let cdf = ndtr(z);
    let f = cdf - p_left;
    let u = f / pdf;
    z -= u * (1.0 + 0.5 * z * u); // ≤ 1 ulp after this step

    // reflect to right tail if necessary
    sign * -z
}
