// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Normal Distribution Module** - *Gaussian Distribution, Central Limit Foundation*
//!
//! Vectorised implementation of the normal (Gaussian) distribution
//! functions (log-density, density, CDF, log-CDF and quantile) over
//! arrays with NumPy-style broadcasting of the value and both parameters.
//!
//! ## Usage Examples
//! ```rust,ignore
//! use gauss_kernels::kernels::scientific::distributions::univariate::normal::*;
//!
//! // Standard normal distribution (μ=0, σ=1)
//! let x = [-2.0, -1.0, 0.0, 1.0, 2.0];
//! let pdf = normal_pdf(&x, 0.0, 1.0).unwrap();
//! let cdf = normal_cdf(&x, 0.0, 1.0).unwrap();
//!
//! // Custom normal distribution (μ=100, σ=15), log-space tail query
//! let scores = [55.0, 85.0, 100.0, 145.0];
//! let log_tail = normal_logcdf(&scores, 100.0, 15.0).unwrap();
//!
//! // Broadcasting: a (2,1) column of values against two scales -> (2,2)
//! use gauss_kernels::array::{NdArray, Shape};
//! let col = NdArray::from_shape_vec(Shape::new(vec![2, 1]), vec![0.0, 1.0]).unwrap();
//! let grid = normal_pdf(col, 0.0, &[1.0, 2.0]).unwrap();
//! ```
//!
//! ## Parameter handling
//! `loc` and `scale` accept anything that promotes into an array:
//! scalars for the common case, arrays for per-element parameters. There
//! is no parameter validation: a zero, negative or non-finite scale
//! produces `NaN`/`inf` in exactly the elements it touches, per IEEE-754,
//! and never aborts the rest of the array. The standard normal is
//! `loc = 0.0, scale = 1.0`.

mod std;

use crate::array::NdArray;
use crate::errors::KernelError;

/// Normal log-PDF - vectorised, broadcasting over value and parameters.
///
/// Computed directly in log-space:
/// `-( ln(2π·scale²) + (x - loc)²/scale² ) / 2`, so densities far in the
/// tails keep finite logarithms where `ln(pdf)` would underflow to
/// `-inf`.
///
/// # Parameters
/// - `x`: evaluation points
/// - `loc`: distribution mean
/// - `scale`: distribution standard deviation
///
/// # Errors
/// [`KernelError::Broadcast`] when the operand shapes cannot broadcast.
#[inline(always)]
pub fn normal_logpdf(
    x: impl Into<NdArray>,
    loc: impl Into<NdArray>,
    scale: impl Into<NdArray>,
) -> Result<NdArray, KernelError> {
    std::normal_logpdf_std(&x.into(), &loc.into(), &scale.into())
}

/// Normal PDF - vectorised, broadcasting over value and parameters.
///
/// Defined as `exp(normal_logpdf(..))` per element; the density formula
/// is not duplicated, so PDF and log-PDF cannot drift apart.
///
/// # Parameters
/// - `x`: evaluation points
/// - `loc`: distribution mean
/// - `scale`: distribution standard deviation
///
/// # Errors
/// [`KernelError::Broadcast`] when the operand shapes cannot broadcast.
#[inline(always)]
pub fn normal_pdf(
    x: impl Into<NdArray>,
    loc: impl Into<NdArray>,
    scale: impl Into<NdArray>,
) -> Result<NdArray, KernelError> {
    std::normal_pdf_std(&x.into(), &loc.into(), &scale.into())
}

/// Normal CDF - vectorised, broadcasting over value and parameters.
///
/// `Φ((x - loc)/scale)`: this layer standardises, the accuracy lives in
/// [`crate::kernels::scientific::ndtr::ndtr`].
///
/// # Parameters
/// - `x`: evaluation points
/// - `loc`: distribution mean
/// - `scale`: distribution standard deviation
///
/// # Errors
/// [`KernelError::Broadcast`] when the operand shapes cannot broadcast.
#[inline(always)]
pub fn normal_cdf(
    x: impl Into<NdArray>,
    loc: impl Into<NdArray>,
    scale: impl Into<NdArray>,
) -> Result<NdArray, KernelError> {
    std::normal_cdf_std(&x.into(), &loc.into(), &scale.into())
}

/// Normal log-CDF - vectorised, broadcasting over value and parameters.
///
/// `ln Φ((x - loc)/scale)` via
/// [`crate::kernels::scientific::ndtr::log_ndtr`], which stays finite and
/// accurate arbitrarily far into the left tail.
///
/// # Parameters
/// - `x`: evaluation points
/// - `loc`: distribution mean
/// - `scale`: distribution standard deviation
///
/// # Errors
/// [`KernelError::Broadcast`] when the operand shapes cannot broadcast.
#[inline(always)]
pub fn normal_logcdf(
    x: impl Into<NdArray>,
    loc: impl Into<NdArray>,
    scale: impl Into<NdArray>,
) -> Result<NdArray, KernelError> {
    std::normal_logcdf_std(&x.into(), &loc.into(), &scale.into())
}

/// Normal quantile (inverse CDF / PPF) - vectorised, broadcasting over
/// probability and parameters.
///
/// `ndtri(q) · scale + loc`. Domain `q ∈ [0, 1]`: exactly 0 and 1 map to
/// `-inf`/`+inf`, anything outside (including NaN) maps to `NaN`. The
/// result is always floating-point, also for integer-valued `q`.
///
/// # Parameters
/// - `q`: probabilities
/// - `loc`: distribution mean
/// - `scale`: distribution standard deviation
///
/// # Errors
/// [`KernelError::Broadcast`] when the operand shapes cannot broadcast.
#[inline(always)]
pub fn normal_quantile(
    q: impl Into<NdArray>,
    loc: impl Into<NdArray>,
    scale: impl Into<NdArray>,
) -> Result<NdArray, KernelError> {
    std::normal_quantile_std(&q.into(), &loc.into(), &scale.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::Shape;
    use crate::kernels::scientific::distributions::univariate::common::assert_close;

    // see "./tests" for the scipy reference suite

    // normal_logpdf: correctness

    #[test]
    fn normal_logpdf_standard_centre() {
        // scipy.stats.norm.logpdf(0) == -0.9189385332046727 (= -½ln(2π))
        let got = normal_logpdf(0.0, 0.0, 1.0).unwrap();
        assert_close(got.data()[0], -0.9189385332046727, 1e-15);
    }

    #[test]
    fn normal_logpdf_standard_values() {
        // scipy.stats.norm.logpdf([-3, -1, 0, 1, 3])
        let x = [-3.0, -1.0, 0.0, 1.0, 3.0];
        let expect = [
            -5.418938533204672,
            -1.4189385332046727,
            -0.9189385332046727,
            -1.4189385332046727,
            -5.418938533204672,
        ];
        let got = normal_logpdf(&x, 0.0, 1.0).unwrap();
        for (a, e) in got.data().iter().zip(expect.iter()) {
            assert_close(*a, *e, 1e-14);
        }
    }

    #[test]
    fn normal_logpdf_location_scale() {
        // scipy.stats.norm.logpdf([-3, -1, 0, 1, 3], loc=2, scale=3)
        let x = [-3.0, -1.0, 0.0, 1.0, 3.0];
        let expect = [
            -3.406439710761671,
            -2.5175508218727822,
            -2.2397730440950046,
            -2.0731063774283376,
            -2.0731063774283376,
        ];
        let got = normal_logpdf(&x, 2.0, 3.0).unwrap();
        for (a, e) in got.data().iter().zip(expect.iter()) {
            assert_close(*a, *e, 1e-14);
        }
    }

    #[test]
    fn normal_logpdf_far_tail_stays_finite() {
        // scipy.stats.norm.logpdf(-100) == -5000.918938533205 while
        // pdf(-100) underflows to exactly 0
        let got = normal_logpdf(-100.0, 0.0, 1.0).unwrap();
        assert_close(got.data()[0], -5000.918938533205, 1e-9);
        let pdf = normal_pdf(-100.0, 0.0, 1.0).unwrap();
        assert_eq!(pdf.data()[0], 0.0);
    }

    #[test]
    fn normal_logpdf_scale_enters_squared() {
        // the scale appears only as scale², so its sign cannot matter
        let a = normal_logpdf(1.3, 0.0, -1.0).unwrap();
        let b = normal_logpdf(1.3, 0.0, 1.0).unwrap();
        assert_eq!(a.data()[0], b.data()[0]);
    }

    #[test]
    fn normal_logpdf_zero_scale_is_nan() {
        // ln(0) + x²/0 combines to NaN at and off the mean
        assert!(normal_logpdf(0.0, 0.0, 0.0).unwrap().data()[0].is_nan());
        assert!(normal_logpdf(1.0, 0.0, 0.0).unwrap().data()[0].is_nan());
    }

    // normal_pdf: correctness

    #[test]
    fn normal_pdf_scipy_values_centre() {
        // scipy.stats.norm.pdf([-3, -1, 0, 1, 2, 4])
        let x = [-3.0, -1.0, 0.0, 1.0, 2.0, 4.0];
        let expect = [
            4.4318484119380075e-03,
            2.4197072451914337e-01,
            3.9894228040143270e-01,
            2.4197072451914337e-01,
            5.3990966513188063e-02,
            1.3383022576488537e-04,
        ];
        let got = normal_pdf(&x, 0.0, 1.0).unwrap();
        for (a, e) in got.data().iter().zip(expect.iter()) {
            assert_close(*a, *e, 1e-15);
        }
    }

    #[test]
    fn normal_pdf_scipy_values_location_scale() {
        // scipy.stats.norm.pdf([0, 1, 2], loc=2, scale=3)
        let x = [0.0, 1.0, 2.0];
        let expect = [0.10648266850745075, 0.12579440923099774, 0.1329807601338109];
        let got = normal_pdf(&x, 2.0, 3.0).unwrap();
        for (a, e) in got.data().iter().zip(expect.iter()) {
            assert_close(*a, *e, 1e-15);
        }
    }

    #[test]
    fn normal_pdf_matches_exp_of_logpdf() {
        let x = [-8.0, -2.5, 0.0, 0.1, 3.7, 40.0];
        let pdf = normal_pdf(&x, 0.7, 2.3).unwrap();
        let logpdf = normal_logpdf(&x, 0.7, 2.3).unwrap();
        for (p, lp) in pdf.data().iter().zip(logpdf.data().iter()) {
            assert_eq!(*p, lp.exp());
        }
    }

    #[test]
    fn normal_pdf_left_right_tails() {
        // scipy.stats.norm.pdf([-1e5, 1e5]) underflows to zero
        let got = normal_pdf(&[-1e5, 1e5], 0.0, 1.0).unwrap();
        assert_eq!(got.data(), &[0.0, 0.0]);
    }

    #[test]
    fn normal_pdf_empty_array() {
        let got = normal_pdf(NdArray::vector(vec![]), 0.0, 1.0).unwrap();
        assert!(got.is_empty());
    }

    #[test]
    fn normal_pdf_nan_propagates_elementwise() {
        let got = normal_pdf(&[1.0, f64::NAN, 3.0], 0.0, 1.0).unwrap();
        assert!(got.data()[0].is_finite());
        assert!(got.data()[1].is_nan());
        assert!(got.data()[2].is_finite());
    }

    #[test]
    fn normal_pdf_infinite_x_is_zero() {
        let got = normal_pdf(&[f64::INFINITY, f64::NEG_INFINITY], 0.0, 1.0).unwrap();
        assert_eq!(got.data(), &[0.0, 0.0]);
    }

    // normal_cdf: correctness

    #[test]
    fn normal_cdf_scipy_values_basic() {
        // scipy.stats.norm.cdf([-2, -1, 0, 1, 2])
        let x = [-2.0, -1.0, 0.0, 1.0, 2.0];
        let expect = [
            0.022750131948179195,
            0.15865525393145707,
            0.5,
            0.8413447460685429,
            0.9772498680518208,
        ];
        let got = normal_cdf(&x, 0.0, 1.0).unwrap();
        for (a, e) in got.data().iter().zip(expect.iter()) {
            assert_close(*a, *e, 1e-15);
        }
    }

    #[test]
    fn normal_cdf_tail_extremes() {
        // scipy.stats.norm.cdf([-1e308, 1e308]) == [0.0, 1.0]
        let got = normal_cdf(&[-1e308, 1e308], 0.0, 1.0).unwrap();
        assert_eq!(got.data(), &[0.0, 1.0]);
    }

    #[test]
    fn normal_cdf_zero_scale_is_a_step() {
        // (x - loc)/0 is ±inf away from the mean and NaN at it
        let got = normal_cdf(&[-1.0, 0.0, 1.0], 0.0, 0.0).unwrap();
        assert_eq!(got.data()[0], 0.0);
        assert!(got.data()[1].is_nan());
        assert_eq!(got.data()[2], 1.0);
    }

    #[test]
    fn normal_cdf_negative_scale_propagates() {
        // no validation: a negative scale flips the standardised value
        let a = normal_cdf(1.0, 0.0, -1.0).unwrap();
        let b = normal_cdf(-1.0, 0.0, 1.0).unwrap();
        assert_eq!(a.data()[0], b.data()[0]);
    }

    // normal_logcdf: correctness

    #[test]
    fn normal_logcdf_scipy_values_basic() {
        // scipy.stats.norm.logcdf([-3, -1, 0, 1, 3])
        let x = [-3.0, -1.0, 0.0, 1.0, 3.0];
        let expect = [
            -6.607726221510348,
            -1.8410216450092634,
            -0.6931471805599453,
            -0.1727537790234499,
            -0.0013508099647481949,
        ];
        let got = normal_logcdf(&x, 0.0, 1.0).unwrap();
        for (a, e) in got.data().iter().zip(expect.iter()) {
            assert_close(*a, *e, 1e-13);
        }
    }

    #[test]
    fn normal_logcdf_location_scale() {
        // scipy.stats.norm.logcdf([-3, 0], loc=-1, scale=0.5)
        let x = [-3.0, 0.0];
        let expect = [-10.36010148652729, -0.0230129093289635];
        let got = normal_logcdf(&x, -1.0, 0.5).unwrap();
        for (a, e) in got.data().iter().zip(expect.iter()) {
            assert_close(*a, *e, 1e-12);
        }
    }

    #[test]
    fn normal_logcdf_deep_tail_finite_where_log_of_cdf_is_not() {
        // cdf(-40) underflows to 0, so ln(cdf) would be -inf;
        // scipy.stats.norm.logcdf(-40) == -804.6084420137538
        let cdf = normal_cdf(-40.0, 0.0, 1.0).unwrap();
        assert_eq!(cdf.data()[0], 0.0);
        let logcdf = normal_logcdf(-40.0, 0.0, 1.0).unwrap();
        assert!((logcdf.data()[0] + 804.6084420137538).abs() < 1e-7);
    }

    #[test]
    fn normal_logcdf_matches_log_of_cdf_in_bulk() {
        let x = [-5.0, -1.0, 0.0, 2.0, 6.0];
        let cdf = normal_cdf(&x, 0.3, 1.7).unwrap();
        let logcdf = normal_logcdf(&x, 0.3, 1.7).unwrap();
        for (c, lc) in cdf.data().iter().zip(logcdf.data().iter()) {
            assert_close(c.ln(), *lc, 1e-12);
        }
    }

    // normal_quantile: correctness

    #[test]
    fn normal_quantile_scipy_values() {
        // scipy.stats.norm.ppf([0.001, 0.025, 0.5, 0.975, 0.999])
        let q = [0.001, 0.025, 0.5, 0.975, 0.999];
        let expect = [
            -3.090232306167813,
            -1.9599639845400545,
            0.,
            1.959963984540054,
            3.090232306167813,
        ];
        let got = normal_quantile(&q, 0.0, 1.0).unwrap();
        for (a, e) in got.data().iter().zip(expect.iter()) {
            assert_close(*a, *e, 2e-14);
        }
    }

    #[test]
    fn normal_quantile_parametrised() {
        // scipy.stats.norm.ppf([0.5, 0.841344746..., 0.977249868...], loc=1, scale=2)
        let q = [0.5, 0.8413447460685429, 0.9772498680518208];
        let expect = [1.0, 3.0, 5.0];
        let got = normal_quantile(&q, 1.0, 2.0).unwrap();
        for (a, e) in got.data().iter().zip(expect.iter()) {
            assert_close(*a, *e, 1e-13);
        }
    }

    #[test]
    fn normal_quantile_boundaries() {
        // scipy.stats.norm.ppf([0, 1]) == [-inf, inf]
        let got = normal_quantile(&[0.0, 1.0], 0.0, 1.0).unwrap();
        assert!(got.data()[0].is_infinite() && got.data()[0].is_sign_negative());
        assert!(got.data()[1].is_infinite() && got.data()[1].is_sign_positive());
    }

    #[test]
    fn normal_quantile_integer_probabilities_yield_floats() {
        // integer-valued q promotes to floating before evaluation
        let got = normal_quantile(&[0i32, 1i32], 0i32, 1i32).unwrap();
        assert_eq!(got.data()[0], f64::NEG_INFINITY);
        assert_eq!(got.data()[1], f64::INFINITY);
    }

    #[test]
    fn normal_quantile_domain_ladder() {
        let q = [f64::NAN, -1.0, 0.0, 0.5, 1.0, 1.5];
        let got = normal_quantile(&q, 0.0, 1.0).unwrap();
        assert!(got.data()[0].is_nan());
        assert!(got.data()[1].is_nan());
        assert_eq!(got.data()[2], f64::NEG_INFINITY);
        assert_eq!(got.data()[3], 0.0);
        assert_eq!(got.data()[4], f64::INFINITY);
        assert!(got.data()[5].is_nan());
    }

    #[test]
    fn normal_quantile_median_is_loc_for_zero_scale() {
        // ndtri(0.5)·0 + loc: degenerate scale propagates, not errors
        let got = normal_quantile(0.5, 7.0, 0.0).unwrap();
        assert_eq!(got.data()[0], 7.0);
        // the boundary quantile turns into inf·0 = NaN
        let got = normal_quantile(0.0, 7.0, 0.0).unwrap();
        assert!(got.data()[0].is_nan());
    }

    #[test]
    fn normal_quantile_round_trip_through_cdf() {
        let x = [-2.0, -0.5, 0.0, 1.2, 5.0];
        let cdf = normal_cdf(&x, 0.0, 1.0).unwrap();
        let ppf = normal_quantile(cdf.data(), 0.0, 1.0).unwrap();
        for (xi, pi) in x.iter().zip(ppf.data().iter()) {
            assert_close(*xi, *pi, 5e-11);
        }
    }

    // broadcasting across the five functions

    #[test]
    fn broadcast_vector_loc() {
        // scipy.stats.norm.pdf(2, loc=[0, 1, 2])
        let got = normal_pdf(2.0, &[0.0, 1.0, 2.0], 1.0).unwrap();
        let expect = [0.053990966513188056, 0.24197072451914337, 0.3989422804014327];
        assert_eq!(got.shape(), &Shape::vector(3));
        for (a, e) in got.data().iter().zip(expect.iter()) {
            assert_close(*a, *e, 1e-15);
        }
    }

    #[test]
    fn broadcast_column_values_against_scale_row() {
        // x (2,1) against scale (2,) -> (2,2)
        let x = NdArray::from_shape_vec(Shape::new(vec![2, 1]), vec![0.0, 1.0]).unwrap();
        let got = normal_pdf(x, 0.0, &[1.0, 2.0]).unwrap();
        assert_eq!(got.shape(), &Shape::matrix(2, 2));
        let expect = [
            0.3989422804014327,
            0.19947114020071632,
            0.24197072451914337,
            0.17603266338214973,
        ];
        for (a, e) in got.data().iter().zip(expect.iter()) {
            assert_close(*a, *e, 1e-15);
        }
    }

    #[test]
    fn broadcast_incompatible_shapes_error() {
        // (3,) against (2,) has no common shape
        let e = normal_pdf(&[0.0, 1.0, 2.0], 0.0, &[1.0, 2.0]);
        assert!(matches!(e, Err(KernelError::Broadcast(_))));

        // all five functions share the driver and must agree
        assert!(normal_logpdf(&[0.0, 1.0, 2.0], 0.0, &[1.0, 2.0]).is_err());
        assert!(normal_cdf(&[0.0, 1.0, 2.0], 0.0, &[1.0, 2.0]).is_err());
        assert!(normal_logcdf(&[0.0, 1.0, 2.0], 0.0, &[1.0, 2.0]).is_err());
        assert!(normal_quantile(&[0.1, 0.5, 0.9], 0.0, &[1.0, 2.0]).is_err());
    }

    #[test]
    fn broadcast_all_scalar_inputs_yield_scalar_output() {
        let got = normal_cdf(0.0, 0.0, 1.0).unwrap();
        assert_eq!(got.rank(), 0);
        assert_eq!(got.data(), &[0.5]);
    }

    #[test]
    fn standardisation_invariance() {
        // cdf(x, loc, scale) == cdf((x - loc)/scale, 0, 1)
        let (x, loc, scale) = (2.7, 1.2, 3.4);
        let a = normal_cdf(x, loc, scale).unwrap();
        let b = normal_cdf((x - loc) / scale, 0.0, 1.0).unwrap();
        assert_eq!(a.data()[0], b.data()[0]);
    }
}
