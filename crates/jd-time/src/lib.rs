//! # jd-time
//!
//! Date and day-count types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `Date` type.
pub mod date;

/// `DayCounter` trait and built-in day-count conventions.
pub mod day_counter;

pub use date::Date;
pub use day_counter::{Actual360, Actual365Fixed, ActualActualIsda, DayCounter};
