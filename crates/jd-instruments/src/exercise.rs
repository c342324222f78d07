//! Option exercise rights.

use jd_time::Date;
use std::fmt;

/// Kind of exercise right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseType {
    /// Exercisable only at expiry.
    European,
    /// Exercisable at any time in a window.
    American,
}

/// When an option can be exercised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exercise {
    /// Single expiry date.
    European {
        /// Expiry.
        expiry: Date,
    },
    /// Any date in `[earliest, latest]`.
    American {
        /// First exercise date.
        earliest: Date,
        /// Last exercise date.
        latest: Date,
    },
}

impl Exercise {
    /// European exercise at `expiry`.
    pub fn european(expiry: Date) -> Self {
        Exercise::European { expiry }
    }

    /// American exercise between `earliest` and `latest` (swapped if given in
    /// the wrong order).
    pub fn american(earliest: Date, latest: Date) -> Self {
        Exercise::American {
            earliest: earliest.min(latest),
            latest: earliest.max(latest),
        }
    }

    /// The exercise type.
    pub fn exercise_type(&self) -> ExerciseType {
        match self {
            Exercise::European { .. } => ExerciseType::European,
            Exercise::American { .. } => ExerciseType::American,
        }
    }

    /// The last date on which the option can be exercised.
    pub fn last_date(&self) -> Date {
        match *self {
            Exercise::European { expiry } => expiry,
            Exercise::American { latest, .. } => latest,
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exercise::European { expiry } => write!(f, "European({expiry})"),
            Exercise::American { earliest, latest } => {
                write!(f, "American({earliest} to {latest})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn european_exercise() {
        let expiry = Date::from_ymd(2026, 6, 15).unwrap();
        let ex = Exercise::european(expiry);
        assert_eq!(ex.exercise_type(), ExerciseType::European);
        assert_eq!(ex.last_date(), expiry);
        assert_eq!(ex.to_string(), "European(2026-06-15)");
    }

    #[test]
    fn american_exercise_orders_dates() {
        let early = Date::from_ymd(2025, 1, 1).unwrap();
        let late = Date::from_ymd(2026, 6, 15).unwrap();
        let ex = Exercise::american(late, early);
        assert_eq!(ex.exercise_type(), ExerciseType::American);
        assert_eq!(ex.last_date(), late);
    }
}
