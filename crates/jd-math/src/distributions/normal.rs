//! Standard normal distribution.

use jd_core::Real;
use statrs::function::erf::erfc;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// Standard normal density `φ(x) = exp(-x²/2) / √(2π)`.
#[inline]
pub fn normal_pdf(x: Real) -> Real {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Standard normal cumulative distribution `Φ(x)`.
///
/// Computed as `erfc(-x/√2)/2`, which avoids the cancellation of `1 - Φ(-x)`
/// in the lower tail. Absolute error is about 1e-11 near the centre, the
/// precision of `statrs`' `erfc`.
#[inline]
pub fn normal_cdf(x: Real) -> Real {
    0.5 * erfc(-x * FRAC_1_SQRT_2)
}
