//! # jd-math
//!
//! The probability distributions the pricing engines need: the standard
//! normal (Black-Scholes) and the Poisson (jump counts).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Probability distributions.
pub mod distributions;

pub use distributions::{normal_cdf, normal_pdf, poisson_pmf, PoissonDistribution};
