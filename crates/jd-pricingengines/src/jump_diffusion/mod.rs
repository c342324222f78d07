//! Merton (1976) jump-diffusion pricing as a Poisson mixture of diffusion
//! prices.

pub mod convergence;
pub mod engine;
pub mod parameters;

pub use convergence::{
    ConvergenceController, IterationTerm, SeriesAccumulator, ITERATIONS_KEY, POISSON_WEIGHT_KEY,
};
pub use engine::{JumpDiffusionConfig, JumpDiffusionEngine};
pub use parameters::JumpDiffusionParameters;
