//! `TermStructure` — base trait for all term structures.
//!
//! Every term structure has a **reference date** (where time is zero) and a
//! **day counter** turning dates into times.

use jd_core::Time;
use jd_time::{Date, DayCounter};
use std::sync::Arc;

/// Base trait for all term structures.
pub trait TermStructure: std::fmt::Debug + Send + Sync {
    /// The date at which time is zero.
    fn reference_date(&self) -> Date;

    /// The day counter used for date → time conversions.
    fn day_counter(&self) -> &dyn DayCounter;

    /// A shared handle to the day counter, for building curves that must use
    /// the same convention.
    fn shared_day_counter(&self) -> Arc<dyn DayCounter>;

    /// The latest date for which the curve can be used.
    fn max_date(&self) -> Date {
        Date::MAX
    }

    /// Year fraction from the reference date to `date`.
    fn time_from_reference(&self, date: Date) -> Time {
        self.day_counter().year_fraction(self.reference_date(), date)
    }
}

/// Reference date and day counter, the state every concrete curve carries.
#[derive(Debug, Clone)]
pub struct TermStructureData {
    /// Reference date.
    pub reference_date: Date,
    /// Day counter for time calculations.
    pub day_counter: Arc<dyn DayCounter>,
}

impl TermStructureData {
    /// Bundle a reference date with an owned day counter.
    pub fn new(reference_date: Date, day_counter: impl DayCounter + 'static) -> Self {
        Self {
            reference_date,
            day_counter: Arc::new(day_counter),
        }
    }

    /// Bundle a reference date with a day counter already shared elsewhere.
    pub fn shared(reference_date: Date, day_counter: Arc<dyn DayCounter>) -> Self {
        Self {
            reference_date,
            day_counter,
        }
    }
}

/// Implements [`TermStructure`] for a type holding `data: TermStructureData`.
macro_rules! impl_term_structure {
    ($ty:ty) => {
        impl $crate::term_structure::TermStructure for $ty {
            fn reference_date(&self) -> jd_time::Date {
                self.data.reference_date
            }

            fn day_counter(&self) -> &dyn jd_time::DayCounter {
                &*self.data.day_counter
            }

            fn shared_day_counter(&self) -> std::sync::Arc<dyn jd_time::DayCounter> {
                std::sync::Arc::clone(&self.data.day_counter)
            }
        }
    };
}

pub(crate) use impl_term_structure;
