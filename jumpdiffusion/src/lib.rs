//! # jumpdiffusion
//!
//! European option pricing under the Merton (1976) jump-diffusion model,
//! computed as a Poisson-weighted mixture of Black-Scholes prices.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying `jd-*` workspace crates. Application code should depend on
//! this crate rather than the individual ones.
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use jumpdiffusion::instruments::{OptionType, VanillaEngine, VanillaOption};
//! use jumpdiffusion::pricingengines::{AnalyticEuropeanEngine, JumpDiffusionEngine};
//! use jumpdiffusion::processes::{black_scholes_process, Merton76Process};
//! use jumpdiffusion::quotes::SimpleQuote;
//! use jumpdiffusion::termstructures::{BlackConstantVol, FlatForward};
//! use jumpdiffusion::time::{Actual365Fixed, Date};
//!
//! # fn main() -> jumpdiffusion::core::Result<()> {
//! let today = Date::from_ymd(2025, 1, 2)?;
//! let diffusion = black_scholes_process(
//!     Arc::new(SimpleQuote::new(100.0)),
//!     Arc::new(FlatForward::continuous(today, 0.05, Actual365Fixed)),
//!     Arc::new(BlackConstantVol::new(today, 0.20, Actual365Fixed)),
//! );
//! let process = Merton76Process::new(Arc::new(diffusion), 0.1, -0.1, 0.15)?;
//!
//! let base: Box<VanillaEngine> = Box::new(AnalyticEuropeanEngine::new());
//! let mut engine = JumpDiffusionEngine::new(Some(base), 1e-4, 100)?;
//!
//! let option = VanillaOption::european(OptionType::Call, 100.0, Date::from_ymd(2026, 1, 2)?);
//! let results = option.price(&mut engine, process.into())?;
//! assert!(results.value > 10.45);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use jd_core as core;

/// Dates and day counters.
pub use jd_time as time;

/// Normal and Poisson distributions.
pub use jd_math as math;

/// Market quotes.
pub use jd_quotes as quotes;

/// Yield and volatility term structures.
pub use jd_termstructures as termstructures;

/// Black-Scholes and Merton process descriptions.
pub use jd_processes as processes;

/// Options, payoffs, exercises and the pricing-engine capability.
pub use jd_instruments as instruments;

/// Analytic and jump-diffusion pricing engines.
pub use jd_pricingengines as pricingengines;
