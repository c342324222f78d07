//! `Date` type.
//!
//! Dates are stored as a serial number of days where serial 1 is
//! January 1, 1900. Serial 0 is reserved as the null sentinel. The valid range
//! is 1900-01-01 to 2199-12-31, proleptic Gregorian.

use jd_core::errors::{Error, Result};

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date(i32);

/// Offset between the Unix-epoch day number and the serial number.
const SERIAL_OFFSET: i32 = 25_568;

impl Date {
    /// The null date sentinel (serial 0).
    pub const NULL: Date = Date(0);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial <= 0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "serial {serial} outside [1, {}]",
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let last = days_in_month(year, month);
        if day == 0 || day > last {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {last}] for {year}-{month:02}"
            )));
        }
        Ok(Date(
            days_from_civil(year as i32, month as i32, day as i32) + SERIAL_OFFSET,
        ))
    }

    /// The serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// `true` for the null sentinel.
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Year (1900–2199).
    pub fn year(&self) -> u16 {
        self.ymd().0
    }

    /// Month (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    fn ymd(&self) -> (u16, u8, u8) {
        let (y, m, d) = civil_from_days(self.0 - SERIAL_OFFSET);
        (y as u16, m as u8, d as u8)
    }

    /// Advance by `n` calendar days.
    pub fn add_days(self, n: i32) -> Result<Self> {
        Self::from_serial(self.0 + n)
    }

    /// Advance by `n` months, clamping the day to the end of the target month.
    pub fn add_months(self, n: i32) -> Result<Self> {
        let (y, m, d) = self.ymd();
        let total = y as i32 * 12 + (m as i32 - 1) + n;
        let year = total.div_euclid(12);
        let month = total.rem_euclid(12) + 1;
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range")));
        }
        let (year, month) = (year as u16, month as u8);
        Self::from_ymd(year, month, d.min(days_in_month(year, month)))
    }

    /// Advance by `n` years (Feb 29 maps to Feb 28 in non-leap years).
    pub fn add_years(self, n: i32) -> Result<Self> {
        self.add_months(n * 12)
    }

    /// Number of calendar days from `self` to `other`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "null date");
        }
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month of a given year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

// Days since 1970-01-01 for a proleptic Gregorian date (March-based years).
fn days_from_civil(y: i32, m: i32, d: i32) -> i32 {
    let y = if m <= 2 { y - 1 } else { y };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn civil_from_days(z: i32) -> (i32, i32, i32) {
    let z = z + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + if m <= 2 { 1 } else { 0 };
    (y, m, d)
}
