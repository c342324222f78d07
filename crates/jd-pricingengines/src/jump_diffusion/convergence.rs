//! The Poisson-weighted series and its stopping rule.

use jd_core::{errors::Error, Probability, Real, Result, Size};
use jd_instruments::OneAssetOptionResults;
use jd_math::distributions::PoissonDistribution;
use tracing::{debug, trace, warn};

use super::engine::JumpDiffusionConfig;
use super::parameters::JumpDiffusionParameters;

/// Key of the series length in the additional results.
pub const ITERATIONS_KEY: &str = "iterations";
/// Key of the Poisson mass covered by the series in the additional results.
pub const POISSON_WEIGHT_KEY: &str = "poisson_weight";

/// One term of the series: the diffusion conditional on `index` jumps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationTerm {
    /// Number of jumps.
    pub index: Size,
    /// Constant volatility of the conditional diffusion.
    pub volatility: Real,
    /// Constant risk-free rate of the conditional diffusion.
    pub rate: Real,
    /// Poisson probability of exactly `index` jumps.
    pub weight: Probability,
}

/// Running, Poisson-weighted sums of value and Greeks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesAccumulator {
    /// Σ wᵢ·valueᵢ.
    pub value: Real,
    /// Σ wᵢ·deltaᵢ.
    pub delta: Real,
    /// Σ wᵢ·gammaᵢ.
    pub gamma: Real,
    /// Σ wᵢ·thetaᵢ.
    pub theta: Real,
    /// Σ wᵢ·vegaᵢ.
    pub vega: Real,
    /// Σ wᵢ·rhoᵢ.
    pub rho: Real,
    /// Σ wᵢ·dividend_rhoᵢ.
    pub dividend_rho: Real,
    /// Number of terms added.
    pub iterations: Size,
    /// Σ wᵢ.
    pub cumulative_weight: Probability,
}

impl SeriesAccumulator {
    /// Fold in one term; returns its value addendum `weight·value`.
    pub fn add(&mut self, weight: Probability, term: &OneAssetOptionResults) -> Real {
        let addendum = weight * term.value;
        self.value += addendum;
        self.delta += weight * term.delta;
        self.gamma += weight * term.gamma;
        self.theta += weight * term.theta;
        self.vega += weight * term.vega;
        self.rho += weight * term.rho;
        self.dividend_rho += weight * term.dividend_rho;
        self.iterations += 1;
        self.cumulative_weight += weight;
        addendum
    }

    /// The sums as engine results, with the series length and covered
    /// Poisson mass as additional results.
    pub fn into_results(self) -> OneAssetOptionResults {
        let mut results = OneAssetOptionResults {
            value: self.value,
            delta: self.delta,
            gamma: self.gamma,
            theta: self.theta,
            vega: self.vega,
            rho: self.rho,
            dividend_rho: self.dividend_rho,
            ..OneAssetOptionResults::default()
        };
        results
            .additional_results
            .insert(ITERATIONS_KEY.to_string(), self.iterations as Real);
        results
            .additional_results
            .insert(POISSON_WEIGHT_KEY.to_string(), self.cumulative_weight);
        results
    }
}

/// Drives the series until the last term's contribution is small enough.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceController {
    relative_accuracy: Real,
    absolute_accuracy: Real,
    max_iterations: Size,
}

impl ConvergenceController {
    /// Controller with the tolerances and cap of `config`.
    pub fn new(config: &JumpDiffusionConfig) -> Self {
        Self {
            relative_accuracy: config.relative_accuracy,
            absolute_accuracy: config.absolute_accuracy,
            max_iterations: config.max_iterations,
        }
    }

    /// How much the last addendum moved the running value.
    ///
    /// Relative to the running value while that is larger than
    /// `absolute_accuracy`. A running value within `absolute_accuracy` of
    /// zero only gives an absolute measure once the Poisson mass not yet
    /// summed, `remaining_weight`, is itself within the relative accuracy;
    /// before that the later terms can still carry the price and the
    /// contribution is infinite.
    pub fn contribution(
        &self,
        addendum: Real,
        running_value: Real,
        remaining_weight: Probability,
    ) -> Real {
        if running_value.abs() > self.absolute_accuracy {
            (addendum / running_value).abs()
        } else if remaining_weight <= self.relative_accuracy {
            addendum.abs()
        } else {
            Real::INFINITY
        }
    }

    /// Sum the series, pricing term `i` with `price_term`.
    ///
    /// Stops after the first term whose contribution is at most the relative
    /// accuracy, or once the Poisson weights sum to one.
    ///
    /// # Errors
    /// `Error::ConvergenceFailure` when the cap is reached first; any error
    /// from `price_term` is returned unchanged.
    pub fn run<F>(
        &self,
        params: &JumpDiffusionParameters,
        mut price_term: F,
    ) -> Result<SeriesAccumulator>
    where
        F: FnMut(&IterationTerm) -> Result<OneAssetOptionResults>,
    {
        let poisson = PoissonDistribution::new(params.poisson_mean)
            .map_err(|e| Error::InvalidArguments(e.to_string()))?;
        let mut acc = SeriesAccumulator::default();
        let mut last_contribution = Real::INFINITY;

        for i in 0..self.max_iterations {
            let term = IterationTerm {
                index: i,
                volatility: params.term_volatility(i),
                rate: params.term_rate(i),
                weight: poisson.pmf(i as u64),
            };
            let priced = price_term(&term)?;
            let addendum = acc.add(term.weight, &priced);
            last_contribution =
                self.contribution(addendum, acc.value, 1.0 - acc.cumulative_weight);
            trace!(
                index = i,
                weight = term.weight,
                volatility = term.volatility,
                rate = term.rate,
                contribution = last_contribution,
                "jump-diffusion series term"
            );

            if last_contribution <= self.relative_accuracy || acc.cumulative_weight >= 1.0 {
                debug!(
                    iterations = acc.iterations,
                    value = acc.value,
                    poisson_weight = acc.cumulative_weight,
                    "jump-diffusion series converged"
                );
                return Ok(acc);
            }
        }

        warn!(
            iterations = acc.iterations,
            accuracy = self.relative_accuracy,
            last_contribution,
            value = acc.value,
            "jump-diffusion series did not converge"
        );
        Err(Error::ConvergenceFailure {
            iterations: acc.iterations,
            accuracy: self.relative_accuracy,
            last_addendum: last_contribution,
            running_value: acc.value,
        })
    }
}
