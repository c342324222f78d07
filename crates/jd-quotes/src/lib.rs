//! # jd-quotes
//!
//! Market quotes: the observable values (spot levels) that processes share.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `Quote` trait and `SimpleQuote`.
pub mod quote;

pub use quote::{Quote, SimpleQuote};
