//! Error types for the jump-diffusion workspace.
//!
//! A single `thiserror`-derived enum covers every failure a pricing call can
//! report. Diagnostic data (iteration counts, tolerances, running values) is
//! carried as structured fields and only turned into text by `Display`.

use crate::{Real, Size};
use thiserror::Error;

/// The top-level error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Date construction or arithmetic out of range.
    #[error("date error: {0}")]
    Date(String),

    /// A scalar model parameter outside its admissible domain, reported when
    /// a process or distribution is constructed.
    #[error("value out of domain: {0}")]
    OutOfDomain(String),

    /// An engine was built from an unusable configuration
    /// (missing base engine, non-positive tolerance, zero iteration cap).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The attached stochastic process is not the variant the engine needs.
    #[error("process type mismatch: expected {expected} process, found {found} process")]
    TypeMismatch {
        /// Kind of process the engine requires.
        expected: &'static str,
        /// Kind of process actually attached.
        found: &'static str,
    },

    /// The arguments bound to an engine are incomplete or inconsistent,
    /// reported by `validate` or `calculate`.
    #[error("invalid pricing arguments: {0}")]
    InvalidArguments(String),

    /// A series did not reach the requested accuracy within its iteration cap.
    #[error(
        "{iterations} iterations have not been enough to reach the required {accuracy:e} \
         accuracy: the last addendum was {last_addendum:e} while the running sum was \
         {running_value:e}"
    )]
    ConvergenceFailure {
        /// Number of terms summed before giving up.
        iterations: Size,
        /// Target relative accuracy.
        accuracy: Real,
        /// Contribution of the last term added; infinite while the partial sum
        /// was still vanishing.
        last_addendum: Real,
        /// Value of the partial sum when the cap was hit.
        running_value: Real,
    },
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidArguments(...))` immediately.
///
/// # Example
/// ```
/// use jd_core::{fail, Error};
/// fn unbound() -> jd_core::Result<()> {
///     fail!("payoff not set");
/// }
/// assert!(matches!(unbound(), Err(Error::InvalidArguments(_))));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidArguments(format!($($msg)*)))
    };
}
