//! Poisson distribution.
//!
//! Wraps `statrs`'s Poisson implementation and adds the degenerate
//! zero-mean case, which `statrs` rejects but which a jump process with no
//! expected jumps over the horizon legitimately produces.

use jd_core::{errors::Error, Probability, Real, Result};
use statrs::distribution::{Discrete, DiscreteCDF, Poisson};

/// Poisson distribution with mean `mean ≥ 0`.
///
/// `mean == 0` is the point mass at zero: `P(X = 0) = 1`.
#[derive(Debug, Clone)]
pub struct PoissonDistribution {
    dist: Option<Poisson>,
    mean: Real,
}

impl PoissonDistribution {
    /// Create a Poisson distribution with the given mean.
    ///
    /// # Errors
    /// `Error::OutOfDomain` if `mean` is negative or not finite.
    pub fn new(mean: Real) -> Result<Self> {
        if !mean.is_finite() || mean < 0.0 {
            return Err(Error::OutOfDomain(format!(
                "Poisson mean must be finite and non-negative, got {mean}"
            )));
        }
        let dist = if mean > 0.0 {
            Some(Poisson::new(mean).map_err(|e| Error::OutOfDomain(e.to_string()))?)
        } else {
            None
        };
        Ok(Self { dist, mean })
    }

    /// Mean parameter.
    pub fn mean(&self) -> Real {
        self.mean
    }

    /// Probability mass function `P(X = k)`.
    pub fn pmf(&self, k: u64) -> Probability {
        match &self.dist {
            Some(d) => d.pmf(k),
            None if k == 0 => 1.0,
            None => 0.0,
        }
    }

    /// Cumulative distribution function `P(X ≤ k)`.
    pub fn cdf(&self, k: u64) -> Probability {
        match &self.dist {
            Some(d) => d.cdf(k),
            None => 1.0,
        }
    }
}

/// `P(X = k)` for `X ~ Poisson(mean)`.
pub fn poisson_pmf(mean: Real, k: u64) -> Result<Probability> {
    Ok(PoissonDistribution::new(mean)?.pmf(k))
}
