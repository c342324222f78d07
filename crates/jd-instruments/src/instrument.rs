//! The pricing-engine capability and the argument/result holder engines share.
//!
//! An engine owns an argument block that callers fill in, a result block it
//! writes to, and the `reset → validate → calculate` life cycle that turns one
//! into the other. Engines can be composed: a wrapping engine drives an inner
//! engine through the same life cycle.

use jd_core::errors::Result;
use jd_time::Date;
use std::fmt;

/// Capability of pricing one kind of instrument.
///
/// `A` is the argument block the engine reads, `R` the result block it
/// produces. A caller fills [`arguments_mut`](Self::arguments_mut), then calls
/// [`validate`](Self::validate) and [`calculate`](Self::calculate) and finally
/// reads [`results`](Self::results).
pub trait PricingEngine<A, R>: fmt::Debug + Send {
    /// Restore the result block to its default (empty) state.
    fn reset(&mut self);

    /// The argument block.
    fn arguments(&self) -> &A;

    /// Mutable access to the argument block.
    fn arguments_mut(&mut self) -> &mut A;

    /// Check the argument block is complete and consistent.
    fn validate(&self) -> Result<()>;

    /// Price the instrument described by the argument block.
    fn calculate(&mut self) -> Result<()>;

    /// The result block of the last calculation.
    fn results(&self) -> &R;
}

/// Argument and result storage shared by concrete engines.
#[derive(Debug, Clone, Default)]
pub struct GenericEngine<A, R> {
    /// Inputs, filled by the caller.
    pub arguments: A,
    /// Outputs, written by `calculate`.
    pub results: R,
}

impl<A, R: Default> GenericEngine<A, R> {
    /// Holder with the given arguments and empty results.
    pub fn with_arguments(arguments: A) -> Self {
        Self {
            arguments,
            results: R::default(),
        }
    }

    /// Clear the results.
    pub fn reset(&mut self) {
        self.results = R::default();
    }
}

/// A financial product with a final relevant date.
pub trait Instrument: fmt::Debug + Send + Sync {
    /// The last date on which the instrument has cash-flow or exercise
    /// significance.
    fn maturity_date(&self) -> Date;

    /// Whether the instrument has no remaining value as of `today`.
    fn is_expired(&self, today: Date) -> bool {
        self.maturity_date() < today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Out {
        value: f64,
    }

    #[test]
    fn generic_engine_reset_clears_results() {
        let mut e: GenericEngine<u32, Out> = GenericEngine::with_arguments(7);
        e.results.value = 3.5;
        e.reset();
        assert_eq!(e.results, Out::default());
        assert_eq!(e.arguments, 7);
    }
}
