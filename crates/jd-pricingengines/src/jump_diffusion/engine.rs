//! Merton (1976) jump-diffusion engine.
//!
//! Conditional on `n` jumps over the option's life, a Merton process is a
//! Black-Scholes diffusion with variance `σ²t + nσ_J²` and drift shifted by
//! `n(μ + σ_J²/2)`. The option value is therefore the Poisson-weighted sum
//! of diffusion prices:
//!
//! ```text
//! V = Σₙ e^{−λ't} (λ't)ⁿ / n! · V_BS(σₙ, rₙ),   λ' = λ(1 + k)
//! ```
//!
//! Each conditional price is delegated to a wrapped diffusion engine.

use jd_core::{errors::Error, Real, Result, Size};
use jd_instruments::{
    GenericEngine, OneAssetOptionResults, PricingEngine, VanillaEngine, VanillaOptionArguments,
};
use jd_processes::EquityProcess;
use std::sync::Arc;
use tracing::debug;

use super::convergence::ConvergenceController;
use super::parameters::JumpDiffusionParameters;

/// Tolerances and cap of the jump-diffusion series.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct JumpDiffusionConfig {
    /// The series stops once a term moves the value by at most this fraction.
    pub relative_accuracy: Real,
    /// Maximum number of series terms.
    pub max_iterations: Size,
    /// Below this magnitude the running value counts as zero and term
    /// contributions are measured in absolute terms.
    pub absolute_accuracy: Real,
}

impl Default for JumpDiffusionConfig {
    fn default() -> Self {
        Self {
            relative_accuracy: 1e-4,
            max_iterations: 100,
            absolute_accuracy: 1e-12,
        }
    }
}

impl JumpDiffusionConfig {
    /// Set the relative accuracy.
    pub fn with_relative_accuracy(mut self, relative_accuracy: Real) -> Self {
        self.relative_accuracy = relative_accuracy;
        self
    }

    /// Set the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: Size) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the absolute accuracy used for a vanishing running value.
    pub fn with_absolute_accuracy(mut self, absolute_accuracy: Real) -> Self {
        self.absolute_accuracy = absolute_accuracy;
        self
    }

    /// Check the tolerances and the cap.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` unless both accuracies are finite and
    /// positive (the absolute one may be zero) and the cap is at least one.
    pub fn validate(&self) -> Result<()> {
        if !(self.relative_accuracy.is_finite() && self.relative_accuracy > 0.0) {
            return Err(Error::InvalidConfiguration(format!(
                "relative accuracy must be finite and positive, got {}",
                self.relative_accuracy
            )));
        }
        if !(self.absolute_accuracy.is_finite() && self.absolute_accuracy >= 0.0) {
            return Err(Error::InvalidConfiguration(format!(
                "absolute accuracy must be finite and non-negative, got {}",
                self.absolute_accuracy
            )));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidConfiguration(
                "max iterations must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Prices European options under a [`Merton76Process`] as a Poisson mixture
/// of diffusion prices computed by a base engine.
///
/// [`Merton76Process`]: jd_processes::Merton76Process
#[derive(Debug)]
pub struct JumpDiffusionEngine {
    base: Box<VanillaEngine>,
    config: JumpDiffusionConfig,
    engine: GenericEngine<VanillaOptionArguments, OneAssetOptionResults>,
}

impl JumpDiffusionEngine {
    /// Create an engine around `base` with the given accuracy and cap.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if `base` is `None`, if
    /// `relative_accuracy` is not finite and positive, or if
    /// `max_iterations` is zero.
    pub fn new(
        base: Option<Box<VanillaEngine>>,
        relative_accuracy: Real,
        max_iterations: Size,
    ) -> Result<Self> {
        Self::with_config(
            base,
            JumpDiffusionConfig::default()
                .with_relative_accuracy(relative_accuracy)
                .with_max_iterations(max_iterations),
        )
    }

    /// Create an engine around `base` with a full configuration.
    pub fn with_config(
        base: Option<Box<VanillaEngine>>,
        config: JumpDiffusionConfig,
    ) -> Result<Self> {
        let base =
            base.ok_or_else(|| Error::InvalidConfiguration("no base engine given".into()))?;
        config.validate()?;
        Ok(Self {
            base,
            config,
            engine: GenericEngine::default(),
        })
    }

    /// The configuration.
    pub fn config(&self) -> &JumpDiffusionConfig {
        &self.config
    }

    /// Change the configuration of an existing engine.
    pub fn set_config(&mut self, config: JumpDiffusionConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// The wrapped diffusion engine, holding the arguments and results of
    /// the last series term it priced.
    pub fn base_engine(&self) -> &VanillaEngine {
        &*self.base
    }

    fn price(&mut self) -> Result<OneAssetOptionResults> {
        let args = &self.engine.arguments;
        let payoff = Arc::clone(args.payoff()?);
        let exercise = *args.exercise()?;
        let process = match args.process()? {
            EquityProcess::JumpDiffusion(p) => Arc::clone(p),
            other => {
                return Err(Error::TypeMismatch {
                    expected: "jump-diffusion",
                    found: other.kind(),
                })
            }
        };

        let params = JumpDiffusionParameters::from_process(&process, exercise.last_date())?;
        debug!(
            poisson_mean = params.poisson_mean,
            t = params.t,
            risk_free_rate = params.risk_free_rate,
            "pricing jump-diffusion series"
        );
        let diffusion = process.diffusion();

        let base = &mut self.base;
        base.reset();
        {
            let base_args = base.arguments_mut();
            base_args.payoff = Some(payoff);
            base_args.exercise = Some(exercise);
            base_args.process = Some(EquityProcess::Diffusion(Arc::clone(diffusion)));
        }
        base.validate().map_err(rejected_by_base)?;

        let controller = ConvergenceController::new(&self.config);
        let series = controller.run(&params, |term| {
            let term_process = params.term_process(diffusion, term);
            base.arguments_mut().process = Some(EquityProcess::Diffusion(Arc::new(term_process)));
            base.validate().map_err(rejected_by_base)?;
            base.calculate()?;
            Ok(base.results().clone())
        })?;
        Ok(series.into_results())
    }
}

fn rejected_by_base(e: Error) -> Error {
    match e {
        Error::InvalidArguments(_) => e,
        other => Error::InvalidArguments(format!("base engine rejected arguments: {other}")),
    }
}

impl PricingEngine<VanillaOptionArguments, OneAssetOptionResults> for JumpDiffusionEngine {
    fn reset(&mut self) {
        self.engine.reset();
    }

    fn arguments(&self) -> &VanillaOptionArguments {
        &self.engine.arguments
    }

    fn arguments_mut(&mut self) -> &mut VanillaOptionArguments {
        &mut self.engine.arguments
    }

    fn validate(&self) -> Result<()> {
        let args = &self.engine.arguments;
        args.validate()?;
        match args.process()? {
            EquityProcess::JumpDiffusion(_) => Ok(()),
            other => Err(Error::TypeMismatch {
                expected: "jump-diffusion",
                found: other.kind(),
            }),
        }
    }

    fn calculate(&mut self) -> Result<()> {
        match self.price() {
            Ok(results) => {
                self.engine.results = results;
                Ok(())
            }
            Err(e) => {
                self.engine.reset();
                Err(e)
            }
        }
    }

    fn results(&self) -> &OneAssetOptionResults {
        &self.engine.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnalyticEuropeanEngine;

    fn base() -> Option<Box<VanillaEngine>> {
        Some(Box::new(AnalyticEuropeanEngine::new()))
    }

    #[test]
    fn default_config() {
        let c = JumpDiffusionConfig::default();
        assert_eq!(c.relative_accuracy, 1e-4);
        assert_eq!(c.max_iterations, 100);
        assert_eq!(c.absolute_accuracy, 1e-12);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn missing_base_engine_is_rejected() {
        let err = JumpDiffusionEngine::new(None, 1e-4, 100).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)), "{err:?}");
    }

    #[test]
    fn bad_tolerances_are_rejected() {
        for (acc, cap) in [(0.0, 100), (-1e-4, 100), (Real::NAN, 100), (1e-4, 0)] {
            let err = JumpDiffusionEngine::new(base(), acc, cap).unwrap_err();
            assert!(matches!(err, Error::InvalidConfiguration(_)), "{acc} {cap}: {err:?}");
        }
        let bad = JumpDiffusionConfig::default().with_absolute_accuracy(-1.0);
        assert!(JumpDiffusionEngine::with_config(base(), bad).is_err());
    }

    #[test]
    fn set_config_validates() {
        let mut engine = JumpDiffusionEngine::new(base(), 1e-4, 100).unwrap();
        assert!(engine
            .set_config(JumpDiffusionConfig::default().with_max_iterations(0))
            .is_err());
        engine
            .set_config(JumpDiffusionConfig::default().with_max_iterations(7))
            .unwrap();
        assert_eq!(engine.config().max_iterations, 7);
    }

    #[test]
    fn empty_arguments_fail_validation() {
        let engine = JumpDiffusionEngine::new(base(), 1e-4, 100).unwrap();
        assert!(matches!(engine.validate(), Err(Error::InvalidArguments(_))));
    }
}
