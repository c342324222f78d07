//! # jd-pricingengines
//!
//! Option pricing engines:
//!
//! * [`AnalyticEuropeanEngine`] — closed-form Black-Scholes-Merton prices
//!   and Greeks under a diffusion process.
//! * [`JumpDiffusionEngine`] — Merton (1976) prices under a jump-diffusion
//!   process, as a Poisson-weighted series of prices from a wrapped
//!   diffusion engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analytic_european_engine;
pub mod jump_diffusion;

pub use analytic_european_engine::{
    black_scholes_merton, AnalyticEuropeanEngine, BlackScholesGreeks,
};
pub use jump_diffusion::{JumpDiffusionConfig, JumpDiffusionEngine, JumpDiffusionParameters};
