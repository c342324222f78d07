//! `YieldTermStructure` — interest-rate term structures.
//!
//! A yield curve must provide either discount factors or continuously
//! compounded zero rates; the other follows from `P(t) = exp(-r(t)·t)`.

use crate::term_structure::TermStructure;
use jd_core::{DiscountFactor, Rate, Time};
use jd_time::Date;

/// A yield (interest-rate) term structure.
///
/// Implementors override at least one of
/// [`discount_impl`](YieldTermStructure::discount_impl) and
/// [`zero_rate_impl`](YieldTermStructure::zero_rate_impl).
pub trait YieldTermStructure: TermStructure {
    /// Discount factor for time `t`.
    fn discount_impl(&self, t: Time) -> DiscountFactor {
        if t == 0.0 {
            return 1.0;
        }
        (-self.zero_rate_impl(t) * t).exp()
    }

    /// Continuously compounded zero rate for time `t > 0`.
    fn zero_rate_impl(&self, t: Time) -> Rate {
        -self.discount_impl(t).ln() / t
    }

    /// Discount factor for a date.
    fn discount_date(&self, date: Date) -> DiscountFactor {
        self.discount_impl(self.time_from_reference(date))
    }

    /// Discount factor for a time.
    fn discount(&self, t: Time) -> DiscountFactor {
        self.discount_impl(t)
    }

    /// Continuously compounded zero rate for a time.
    fn zero_rate(&self, t: Time) -> Rate {
        self.zero_rate_impl(t)
    }
}
