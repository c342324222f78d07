//! `FlatForward` — a yield curve with a constant continuously compounded
//! rate.

use crate::term_structure::{impl_term_structure, TermStructureData};
use crate::yield_term_structure::YieldTermStructure;
use jd_core::{DiscountFactor, Rate, Time};
use jd_time::{Date, DayCounter};
use std::sync::Arc;

/// A flat (constant) forward-rate yield curve: `P(t) = exp(-r·t)`.
#[derive(Debug, Clone)]
pub struct FlatForward {
    data: TermStructureData,
    rate: Rate,
}

impl FlatForward {
    /// Create a flat curve with continuous compounding.
    pub fn continuous(
        reference_date: Date,
        rate: Rate,
        day_counter: impl DayCounter + 'static,
    ) -> Self {
        Self {
            data: TermStructureData::new(reference_date, day_counter),
            rate,
        }
    }

    /// Create a flat curve reusing a day counter shared with another curve.
    pub fn with_shared_day_counter(
        reference_date: Date,
        rate: Rate,
        day_counter: Arc<dyn DayCounter>,
    ) -> Self {
        Self {
            data: TermStructureData::shared(reference_date, day_counter),
            rate,
        }
    }

    /// The continuously compounded rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }
}

impl_term_structure!(FlatForward);

impl YieldTermStructure for FlatForward {
    fn discount_impl(&self, t: Time) -> DiscountFactor {
        (-self.rate * t).exp()
    }

    fn zero_rate_impl(&self, _t: Time) -> Rate {
        self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term_structure::TermStructure;
    use approx::assert_abs_diff_eq;
    use jd_time::{Actual360, Actual365Fixed};
    use proptest::prelude::*;

    #[test]
    fn flat_forward_discount() {
        let ref_date = Date::from_ymd(2025, 1, 2).unwrap();
        let curve = FlatForward::continuous(ref_date, 0.05, Actual365Fixed);

        assert_abs_diff_eq!(curve.discount(0.0), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(curve.discount(1.0), (-0.05_f64).exp(), epsilon = 1e-12);
        assert_abs_diff_eq!(curve.discount(10.0), (-0.5_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn flat_forward_discount_date() {
        let ref_date = Date::from_ymd(2025, 1, 2).unwrap();
        let curve = FlatForward::continuous(ref_date, 0.05, Actual360);

        assert_abs_diff_eq!(curve.discount_date(ref_date), 1.0, epsilon = 1e-15);
        let d1 = Date::from_ymd(2025, 7, 1).unwrap();
        let t = 180.0 / 360.0;
        assert_abs_diff_eq!(curve.time_from_reference(d1), t, epsilon = 1e-15);
        assert_abs_diff_eq!(curve.discount_date(d1), (-0.05 * t).exp(), epsilon = 1e-14);
    }

    #[test]
    fn shared_day_counter_is_reused() {
        let ref_date = Date::from_ymd(2025, 1, 2).unwrap();
        let original = FlatForward::continuous(ref_date, 0.01, Actual360);
        let copy = FlatForward::with_shared_day_counter(
            ref_date,
            0.02,
            original.shared_day_counter(),
        );
        assert_eq!(copy.day_counter().name(), "Actual/360");
        assert_abs_diff_eq!(copy.rate(), 0.02);
    }

    proptest! {
        #[test]
        fn zero_rate_recovers_flat_rate(rate in -0.05f64..0.2, t in 0.01f64..30.0) {
            let ref_date = Date::from_ymd(2025, 1, 2).unwrap();
            let curve = FlatForward::continuous(ref_date, rate, Actual365Fixed);
            let implied = -curve.discount(t).ln() / t;
            prop_assert!((implied - rate).abs() < 1e-12);
            prop_assert!((curve.zero_rate(t) - rate).abs() < 1e-15);
        }
    }
}
