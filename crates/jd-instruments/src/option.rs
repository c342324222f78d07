//! One-asset vanilla options: engine arguments, engine results and the
//! instrument itself.

use crate::exercise::Exercise;
use crate::instrument::{Instrument, PricingEngine};
use crate::payoff::{OptionType, PlainVanillaPayoff, StrikedPayoff};
use jd_core::{errors::Error, fail, Real, Result};
use jd_processes::EquityProcess;
use jd_time::Date;
use std::collections::HashMap;
use std::sync::Arc;

/// Engine type pricing a one-asset vanilla option.
pub type VanillaEngine = dyn PricingEngine<VanillaOptionArguments, OneAssetOptionResults>;

/// Inputs an engine needs to price a one-asset option.
///
/// Every field starts unset; [`validate`](Self::validate) rejects a block
/// with a missing field.
#[derive(Debug, Clone, Default)]
pub struct VanillaOptionArguments {
    /// The payoff.
    pub payoff: Option<Arc<dyn StrikedPayoff>>,
    /// The exercise right.
    pub exercise: Option<Exercise>,
    /// The underlying's process.
    pub process: Option<EquityProcess>,
}

impl VanillaOptionArguments {
    /// Check that payoff, exercise and process are attached and that the
    /// strike is a finite non-negative number.
    ///
    /// # Errors
    /// `Error::InvalidArguments` naming the first problem found.
    pub fn validate(&self) -> Result<()> {
        let payoff = self.payoff()?;
        self.exercise()?;
        self.process()?;
        let strike = payoff.strike();
        if !(strike.is_finite() && strike >= 0.0) {
            fail!("strike ({strike}) must be finite and non-negative");
        }
        Ok(())
    }

    /// The attached payoff.
    pub fn payoff(&self) -> Result<&Arc<dyn StrikedPayoff>> {
        self.payoff
            .as_ref()
            .ok_or_else(|| Error::InvalidArguments("no payoff given".into()))
    }

    /// The attached exercise.
    pub fn exercise(&self) -> Result<&Exercise> {
        self.exercise
            .as_ref()
            .ok_or_else(|| Error::InvalidArguments("no exercise given".into()))
    }

    /// The attached process.
    pub fn process(&self) -> Result<&EquityProcess> {
        self.process
            .as_ref()
            .ok_or_else(|| Error::InvalidArguments("no process given".into()))
    }
}

/// Value and sensitivities of a one-asset option.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OneAssetOptionResults {
    /// Present value.
    pub value: Real,
    /// ∂V/∂S.
    pub delta: Real,
    /// ∂²V/∂S².
    pub gamma: Real,
    /// ∂V/∂t, per year.
    pub theta: Real,
    /// ∂V/∂σ.
    pub vega: Real,
    /// ∂V/∂r.
    pub rho: Real,
    /// ∂V/∂q.
    pub dividend_rho: Real,
    /// Engine-specific named outputs.
    pub additional_results: HashMap<String, Real>,
}

impl OneAssetOptionResults {
    /// A named engine-specific output, if the engine produced it.
    pub fn additional_result(&self, key: &str) -> Option<Real> {
        self.additional_results.get(key).copied()
    }
}

/// A plain option on a single underlying asset.
#[derive(Debug, Clone)]
pub struct VanillaOption {
    payoff: Arc<dyn StrikedPayoff>,
    exercise: Exercise,
}

impl VanillaOption {
    /// Create a new vanilla option.
    pub fn new(payoff: Arc<dyn StrikedPayoff>, exercise: Exercise) -> Self {
        Self { payoff, exercise }
    }

    /// A European call or put.
    pub fn european(option_type: OptionType, strike: Real, expiry: Date) -> Self {
        Self::new(
            Arc::new(PlainVanillaPayoff::new(option_type, strike)),
            Exercise::european(expiry),
        )
    }

    /// The payoff.
    pub fn payoff(&self) -> &Arc<dyn StrikedPayoff> {
        &self.payoff
    }

    /// The exercise.
    pub fn exercise(&self) -> &Exercise {
        &self.exercise
    }

    /// Write payoff, exercise and `process` into an engine's argument block.
    pub fn setup_arguments(&self, args: &mut VanillaOptionArguments, process: EquityProcess) {
        args.payoff = Some(Arc::clone(&self.payoff));
        args.exercise = Some(self.exercise);
        args.process = Some(process);
    }

    /// Price this option under `process` with `engine`.
    ///
    /// Runs the engine's full life cycle and returns a copy of its results.
    pub fn price<E>(
        &self,
        engine: &mut E,
        process: EquityProcess,
    ) -> Result<OneAssetOptionResults>
    where
        E: PricingEngine<VanillaOptionArguments, OneAssetOptionResults> + ?Sized,
    {
        engine.reset();
        self.setup_arguments(engine.arguments_mut(), process);
        engine.validate()?;
        engine.calculate()?;
        Ok(engine.results().clone())
    }
}

impl Instrument for VanillaOption {
    fn maturity_date(&self) -> Date {
        self.exercise.last_date()
    }
}
