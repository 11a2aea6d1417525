//! Calendar date model for the wheel controller.
//!
//! Dates here are plain `(year, month, day)` triples with no time zone or
//! time-of-day component; equality and ordering are lexicographic. The
//! day-count rule is the proleptic Gregorian calendar for all representable
//! years (0001 through 9999).

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};

use crate::error::{Result, WheelError};
use crate::wheel::WheelAxis;

/// Whether `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the given month of the given year.
///
/// February is leap-year aware; all other months are fixed.
///
/// # Panics
///
/// Panics if `month` is outside `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => panic!("month {month} is outside 1..=12"),
    }
}

/// A calendar date: year, month (1-12), and day (1-31, valid for that
/// year/month).
///
/// Ordering is lexicographic by (year, month, day), which the derived `Ord`
/// provides given the field order. `CalendarDate` is `Copy` and can be
/// clamped with [`Ord::clamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    /// Year, 1 through 9999.
    pub year: i32,
    /// Month of year, 1 through 12.
    pub month: u32,
    /// Day of month, 1 through `days_in_month(year, month)`.
    pub day: u32,
}

impl CalendarDate {
    /// The earliest representable date, 0001-01-01.
    pub const MIN: CalendarDate = CalendarDate {
        year: 1,
        month: 1,
        day: 1,
    };

    /// The latest representable date, 9999-12-31.
    pub const MAX: CalendarDate = CalendarDate {
        year: 9999,
        month: 12,
        day: 31,
    };

    /// Create a date from its components, validating each field.
    ///
    /// Fails with [`WheelError::OutOfRange`] naming the offending axis when
    /// the year is outside 1-9999, the month outside 1-12, or the day
    /// outside the month's day count.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(Self::MIN.year..=Self::MAX.year).contains(&year) {
            return Err(WheelError::out_of_range(
                WheelAxis::Year,
                year,
                Self::MIN.year,
                Self::MAX.year,
            ));
        }
        if !(1..=12).contains(&month) {
            return Err(WheelError::out_of_range(WheelAxis::Month, month as i32, 1, 12));
        }
        let last_day = days_in_month(year, month);
        if !(1..=last_day).contains(&day) {
            return Err(WheelError::out_of_range(
                WheelAxis::Day,
                day as i32,
                1,
                last_day as i32,
            ));
        }
        Ok(Self { year, month, day })
    }

    /// Today's date in the local time zone.
    pub fn today() -> Self {
        Local::now().date_naive().into()
    }

    /// Convert to a chrono [`NaiveDate`].
    ///
    /// Returns `None` only if the components do not form a valid chrono
    /// date, which cannot happen for a value built through [`from_ymd`]
    /// (chrono accepts the full 0001-9999 span).
    ///
    /// [`from_ymd`]: Self::from_ymd
    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Number of days in this date's month.
    pub fn month_len(self) -> u32 {
        days_in_month(self.year, self.month)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// An inclusive date range `[start, last]`.
///
/// The invariant `start <= last` is enforced at construction; a range is
/// replaced atomically, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: CalendarDate,
    last: CalendarDate,
}

impl DateRange {
    /// Create a range, failing with [`WheelError::InvalidRange`] if
    /// `start > last`.
    pub fn new(start: CalendarDate, last: CalendarDate) -> Result<Self> {
        if start > last {
            return Err(WheelError::invalid_range(start, last));
        }
        Ok(Self { start, last })
    }

    /// The widest representable range, 0001-01-01 through 9999-12-31.
    pub fn sentinel() -> Self {
        Self {
            start: CalendarDate::MIN,
            last: CalendarDate::MAX,
        }
    }

    /// The inclusive start of the range.
    pub fn start(&self) -> CalendarDate {
        self.start
    }

    /// The inclusive end of the range.
    pub fn last(&self) -> CalendarDate {
        self.last
    }

    /// Whether `date` lies within the range.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.last
    }

    /// Clamp `date` to the nearer endpoint if it lies outside the range.
    pub fn clamp(&self, date: CalendarDate) -> CalendarDate {
        date.clamp(self.start, self.last)
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::sentinel()
    }
}
