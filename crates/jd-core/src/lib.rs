//! # jd-core
//!
//! Core types and error definitions shared by every crate in the
//! jump-diffusion workspace: numeric type aliases, the [`Error`] enum, and
//! the `fail!` macro.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `fail!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the workspace.
pub type Real = f64;

/// Alias used for counts, sizes and indices.
pub type Size = usize;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A discount factor in [0, 1].
pub type DiscountFactor = Real;

/// A price or value.
pub type Price = Real;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

/// A time measurement in years.
pub type Time = Real;

/// A probability in [0, 1].
pub type Probability = Real;

pub use errors::{Error, Result};
