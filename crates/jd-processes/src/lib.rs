//! # jd-processes
//!
//! Process descriptions consumed by the option engines: the generalized
//! Black-Scholes diffusion, the Merton (1976) jump diffusion, and the
//! [`EquityProcess`] sum type engines dispatch on.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod black_scholes_process;
pub mod equity_process;
pub mod merton76_process;

pub use black_scholes_process::{black_scholes_process, GeneralizedBlackScholesProcess};
pub use equity_process::EquityProcess;
pub use merton76_process::Merton76Process;
