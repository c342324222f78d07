//! `Quote` trait and `SimpleQuote` implementation.

use jd_core::{errors::Error, Real, Result};

/// A market-observable value.
pub trait Quote: std::fmt::Debug + Send + Sync {
    /// The current value, or `None` if the quote is not set.
    fn value(&self) -> Option<Real>;

    /// `true` if the quote currently holds a value.
    fn is_valid(&self) -> bool {
        self.value().is_some()
    }

    /// The current value, failing with `Error::InvalidArguments` when unset.
    fn checked_value(&self) -> Result<Real> {
        self.value()
            .ok_or_else(|| Error::InvalidArguments("quote has no value".into()))
    }
}

/// A plain stored quote.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleQuote {
    value: Option<Real>,
}

impl SimpleQuote {
    /// Create a quote holding `value`.
    pub fn new(value: Real) -> Self {
        Self { value: Some(value) }
    }

    /// Create an empty (invalid) quote.
    pub fn empty() -> Self {
        Self { value: None }
    }

    /// Store a new value.
    pub fn set_value(&mut self, value: Real) {
        self.value = Some(value);
    }

    /// Clear the value.
    pub fn reset(&mut self) {
        self.value = None;
    }
}

impl Quote for SimpleQuote {
    fn value(&self) -> Option<Real> {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_quote() {
        let mut q = SimpleQuote::new(100.0);
        assert!(q.is_valid());
        assert_eq!(q.checked_value(), Ok(100.0));
        q.set_value(101.5);
        assert_eq!(q.value(), Some(101.5));
    }

    #[test]
    fn empty_quote_fails_checked_read() {
        let mut q = SimpleQuote::new(1.0);
        q.reset();
        assert!(!q.is_valid());
        assert!(matches!(q.checked_value(), Err(Error::InvalidArguments(_))));
        assert_eq!(SimpleQuote::empty(), q);
    }
}
