//! Probability distributions, delegating to the `statrs` crate.

pub mod normal;
pub mod poisson;

pub use normal::{normal_cdf, normal_pdf};
pub use poisson::{poisson_pmf, PoissonDistribution};
