// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.

//! # gauss-kernels
//!
//! Vectorised normal-distribution kernels (`logpdf`, `pdf`, `cdf`,
//! `logcdf` and the quantile function) over arrays with NumPy-style
//! broadcasting of the evaluation points and both parameters
//! (`loc`, `scale`).
//!
//! Every kernel is a pure, stateless, element-wise transform: inputs are
//! promoted to a common `f64` element type, broadcast to a common shape,
//! and mapped through a scalar body. Degenerate values propagate through
//! IEEE-754 arithmetic into the output (`NaN`/`inf` elements) instead of
//! raising; the only reportable error is a shape pair that will not
//! broadcast. Calls are safe to issue concurrently from any number of
//! threads, since nothing is shared and nothing is mutated.
//!
//! ```rust
//! use gauss_kernels::{normal_cdf, normal_quantile};
//!
//! let p = normal_cdf(&[-1.96, 0.0, 1.96], 0.0, 1.0).unwrap();
//! assert_eq!(p.data()[1], 0.5);
//!
//! let z = normal_quantile(&[0.025, 0.5, 0.975], 0.0, 1.0).unwrap();
//! assert!((z.data()[2] - 1.959963984540054).abs() < 1e-12);
//! ```

pub mod array;

pub mod errors;

pub mod kernels {
    pub mod scientific {
        pub mod distributions;
        pub mod erf;
        pub mod ndtr;
    }
}

pub use array::{NdArray, Shape};
pub use errors::KernelError;
pub use kernels::scientific::distributions::univariate::normal::{
    normal_cdf, normal_logcdf, normal_logpdf, normal_pdf, normal_quantile,
};
pub use kernels::scientific::ndtr::{log_ndtr, ndtr, ndtri};
