//! `DayCounter` trait and the day-count conventions used by the pricing
//! curves.
//!
//! A day counter turns a pair of dates into a year fraction. Curves carry one
//! and every time-to-expiry in the engines is measured with it.

use crate::date::{is_leap_year, Date};
use jd_core::{Real, Time};

/// A convention for counting the fraction of a year between two dates.
pub trait DayCounter: std::fmt::Debug + Send + Sync {
    /// Human-readable name of the convention.
    fn name(&self) -> &str;

    /// Number of days between `d1` and `d2` under this convention.
    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        (d2 - d1) as i64
    }

    /// Fraction of a year between `d1` and `d2`.
    fn year_fraction(&self, d1: Date, d2: Date) -> Time;
}

/// Actual/365 (Fixed).
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual365Fixed;

impl DayCounter for Actual365Fixed {
    fn name(&self) -> &str {
        "Actual/365 (Fixed)"
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 365.0
    }
}

/// Actual/360.
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual360;

impl DayCounter for Actual360 {
    fn name(&self) -> &str {
        "Actual/360"
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 360.0
    }
}

/// Actual/Actual (ISDA): the period is split at calendar-year boundaries and
/// each piece is divided by the length of its own year.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActualActualIsda;

impl DayCounter for ActualActualIsda {
    fn name(&self) -> &str {
        "Actual/Actual (ISDA)"
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        if d1 > d2 {
            return -self.year_fraction(d2, d1);
        }
        let mut start = d1;
        let mut fraction = 0.0;
        for year in d1.year()..=d2.year() {
            let end = if year == d2.year() {
                d2
            } else {
                match Date::from_ymd(year + 1, 1, 1) {
                    Ok(d) => d,
                    // only reachable past 2199, where no valid d2 exists
                    Err(_) => d2,
                }
            };
            let basis = if is_leap_year(year) { 366.0 } else { 365.0 };
            fraction += (end - start) as Real / basis;
            start = end;
        }
        fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn actual365_fixed() {
        let dc = Actual365Fixed;
        let d1 = date(2023, 1, 1);
        let d2 = date(2024, 1, 1);
        assert_eq!(dc.day_count(d1, d2), 365);
        assert!((dc.year_fraction(d1, d2) - 1.0).abs() < 1e-12);
        assert!((dc.year_fraction(d2, d1) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn actual360_half_year() {
        let dc = Actual360;
        let d1 = date(2023, 1, 1);
        let d2 = date(2023, 7, 1);
        assert!((dc.year_fraction(d1, d2) - 181.0 / 360.0).abs() < 1e-12);
    }

    #[test]
    fn isda_whole_years() {
        let dc = ActualActualIsda;
        assert!((dc.year_fraction(date(2023, 1, 1), date(2024, 1, 1)) - 1.0).abs() < 1e-12);
        assert!((dc.year_fraction(date(2024, 1, 1), date(2026, 1, 1)) - 2.0).abs() < 1e-12);
        assert_eq!(dc.year_fraction(date(2024, 5, 5), date(2024, 5, 5)), 0.0);
    }
}
