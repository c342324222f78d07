//! # jd-instruments
//!
//! Vanilla options and the engine capability that prices them: payoffs,
//! exercise rights, the argument and result blocks an engine reads and
//! writes, and the [`PricingEngine`] trait.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod exercise;
pub mod instrument;
pub mod option;
pub mod payoff;

pub use exercise::{Exercise, ExerciseType};
pub use instrument::{GenericEngine, Instrument, PricingEngine};
pub use option::{OneAssetOptionResults, VanillaEngine, VanillaOption, VanillaOptionArguments};
pub use payoff::{OptionType, Payoff, PlainVanillaPayoff, StrikedPayoff};
