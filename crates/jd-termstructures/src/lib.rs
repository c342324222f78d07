//! # jd-termstructures
//!
//! Yield curves and Black-volatility term structures, with the flat
//! (constant) curves the jump-diffusion engine rebuilds on every series term.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `TermStructure` — base trait for all term structures.
pub mod term_structure;

/// `YieldTermStructure` — yield / interest-rate term structures.
pub mod yield_term_structure;

/// `FlatForward` — constant-rate yield curve.
pub mod flat_forward;

/// `BlackVolTermStructure` and `BlackConstantVol`.
pub mod black_vol_term_structure;

pub use black_vol_term_structure::{BlackConstantVol, BlackVolTermStructure};
pub use flat_forward::FlatForward;
pub use term_structure::{TermStructure, TermStructureData};
pub use yield_term_structure::YieldTermStructure;
