// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Statistical Distributions Module** - *Normal Distribution Computing*
//!
//! Distribution kernels providing probability density, cumulative
//! distribution and quantile functions with full broadcasting over the
//! evaluation points and both distribution parameters.
//!
//! ## Core Statistical Functions
//! The normal distribution exposes the complete log-aware interface:
//! - **Density**: `normal_pdf` / `normal_logpdf`, the latter evaluated
//!   directly in log-space for far-tail stability
//! - **Cumulative distribution**: `normal_cdf` / `normal_logcdf`, the
//!   latter finite arbitrarily far into the left tail
//! - **Quantile function**: `normal_quantile`, the inverse CDF
//!
//! ## Edge-Value Philosophy
//! We recognise `inf` and `NaN` as valid float values, leaving it to the
//! user to subsequently treat them as they wish, given that there are
//! numerical scenarios where they represent information gain. Degenerate
//! parameters (zero or negative scale, out-of-domain probabilities)
//! therefore produce `NaN`/`inf` in the affected output elements rather
//! than aborting whole-array computations; the only reportable error is a
//! pair of shapes that will not broadcast.
//!
//! ## Numerical Precision and Stability
//! All implementations prioritise accuracy across parameter ranges and
//! are measured against SciPy (v1.16); see `./tests` for the specific
//! tolerances. Platform differences may shift results by a few ulp, which
//! one should keep in mind when evaluating this library's fit for a given
//! use case.

/// # **Shared Distribution Utilities** - *Common Infrastructure*
///
/// Constants and coefficient tables shared across the distribution
/// kernels.
///
/// ## Modules
/// - **`constants`**: Mathematical constants and Acklam coefficient tables
pub mod shared {
    pub mod constants;
}

/// # **Univariate Distributions** - *Single-Variable Probability Distributions*
///
/// Univariate distribution kernels and the broadcast drivers they share.
///
/// ## Modules
/// - **`common`**: Broadcast resolution and element-wise kernel drivers
/// - **`normal`**: Normal (Gaussian) distribution functions
pub mod univariate {
    // common kernel patterns
    pub mod common;

    // distributions
    pub mod normal;
}
