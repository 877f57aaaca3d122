//! Hebrew calendar dates with exact conversion to and from the Gregorian
//! calendar.
//!
//! Every date is pinned to an absolute day number (RD, "Rata Die") where
//! RD 1 is 1 January 1 of the proleptic Gregorian calendar. Hebrew dates,
//! historical Gregorian dates (Julian before 14 September 1752) and proleptic
//! Gregorian dates all convert through it.
//!
//! ```
//! use hebrew_date::{HDate, HMonth, Weekday};
//!
//! let date = HDate::new(5769, HMonth::Cheshvan, 15);
//! assert_eq!(date.rd(), 733_359);
//! assert_eq!(date.to_string(), "15 Cheshvan 5769");
//! assert_eq!(date.greg().to_string(), "2008-11-13");
//! assert_eq!(date.weekday(), Weekday::Thursday);
//! ```

mod consts;
pub mod convert;
pub mod epoch;
pub mod greg;
mod names;
mod prelude;
mod types;

pub use consts::*;
pub use epoch::{days_in_month, days_in_year, is_leap_year, months_in_year, year_type};
pub use greg::CivilDate;
pub use names::{Locale, month_from_name, month_name};
pub use types::{GregorianDate, HMonth, Weekday, YearType};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::Sub;
use std::str::FromStr;

/// Logs through the `log` facade when the `log` feature is enabled.
macro_rules! debug {
    ($($args:tt)+) => {
        #[cfg(feature = "log")]
        log::debug!($($args)+);
    };
}

macro_rules! trace {
    ($($args:tt)+) => {
        #[cfg(feature = "log")]
        log::trace!($($args)+);
    };
}

pub(crate) use {debug, trace};

/// Error type for the fallible parts of the crate: parsing month names,
/// locale tags and date strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HDateError {
    /// The text names no Hebrew month.
    #[error("unable to parse month name: {0:?}")]
    UnparseableMonthName(String),

    /// The language tag has no month-name table.
    #[error("unknown locale: {0:?}")]
    UnknownLocale(String),

    /// A month number outside 1..=13.
    #[error("invalid month number: {0} (must be 1-13)")]
    InvalidMonth(u8),

    /// A date string that is not "<day> <month> <year>".
    #[error("invalid date format: {0}")]
    InvalidFormat(String),
}

/// A date in the Hebrew calendar.
///
/// The value is immutable. Every constructor normalizes its input (Adar II
/// in a common year becomes Adar, out-of-range days are clamped) and caches
/// the absolute day number, so comparisons and conversions are O(1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(
    fmt = "{} {} {}",
    day,
    "month_name(*month, is_leap_year(*year), Locale::En)",
    year
)]
#[serde(try_from = "HDateRecord", into = "HDateRecord")]
pub struct HDate {
    year: i32,
    month: HMonth,
    day: u8,
    rd: i64,
}

/// Structured form of an [`HDate`]: `{"hy": 5769, "hm": "Cheshvan", "hd": 15}`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HDateRecord {
    hy: i32,
    hm: String,
    hd: u8,
}

impl From<HDate> for HDateRecord {
    fn from(date: HDate) -> Self {
        Self {
            hy: date.year,
            hm: date.month_name_in(Locale::En).to_owned(),
            hd: date.day,
        }
    }
}

impl TryFrom<HDateRecord> for HDate {
    type Error = HDateError;

    fn try_from(record: HDateRecord) -> Result<Self, Self::Error> {
        let month = month_from_name(&record.hm)?;
        Ok(Self::new(record.hy, month, record.hd))
    }
}

impl HDate {
    /// Creates a Hebrew date.
    ///
    /// Years before 1 are raised to 1. Adar II in a common year becomes
    /// Adar. The day is clamped into the month.
    pub fn new(year: i32, month: HMonth, day: u8) -> Self {
        let year = if year < MIN_YEAR {
            debug!("year {year} raised to {MIN_YEAR}");
            MIN_YEAR
        } else {
            year
        };
        let normalized = month.normalize(is_leap_year(year));
        if normalized != month {
            debug!("{month:?} collapsed to {normalized:?} in common year {year}");
        }
        let max_day = days_in_month(normalized, year);
        let clamped = day.clamp(1, max_day);
        if clamped != day {
            debug!("day {day} of {normalized:?} {year} clamped to {clamped}");
        }
        Self {
            year,
            month: normalized,
            day: clamped,
            rd: convert::to_rd(year, normalized, i64::from(clamped)),
        }
    }

    /// Hebrew date of an absolute day number.
    ///
    /// Days before 1 Tishrei of year 1 give 1 Tishrei of year 1.
    pub fn from_rd(rd: i64) -> Self {
        let first = convert::new_year_rd(MIN_YEAR);
        let rd = if rd < first {
            debug!("RD {rd} precedes the Hebrew epoch, using RD {first}");
            first
        } else {
            rd
        };
        let (year, month, day) = convert::from_rd(rd);
        Self {
            year,
            month,
            day,
            rd,
        }
    }

    /// Hebrew date of a historical Gregorian date (Julian before 14
    /// September 1752).
    pub fn from_gregorian(year: i32, month: u8, day: u8) -> Self {
        Self::from_rd(greg::to_rd(year, month, day))
    }

    /// Hebrew date of a proleptic Gregorian date.
    pub fn from_proleptic_gregorian(year: i32, month: u8, day: u8) -> Self {
        Self::from_rd(greg::proleptic_to_rd(year, month, day))
    }

    /// Hebrew date of anything carrying a civil date, read as historical
    /// Gregorian.
    pub fn from_time<T: CivilDate + ?Sized>(time: &T) -> Self {
        let (year, month, day) = time.civil_ymd();
        Self::from_gregorian(year, month, day)
    }

    /// Today's Hebrew date, taking the current UTC calendar day.
    #[cfg(feature = "now")]
    pub fn today() -> Self {
        use web_time::{SystemTime, UNIX_EPOCH};

        let nanos = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(after) => greg::duration_nanos(after),
            Err(before) => -greg::duration_nanos(before.duration()),
        };
        Self::from_rd(greg::rd_from_unix_nanos(nanos))
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> HMonth {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Absolute day number (RD 1 = 1 January 1, proleptic Gregorian)
    #[inline]
    pub const fn rd(&self) -> i64 {
        self.rd
    }

    pub const fn weekday(&self) -> Weekday {
        Weekday::from_rd(self.rd)
    }

    /// Historical Gregorian date (Julian before 14 September 1752)
    pub const fn greg(&self) -> GregorianDate {
        greg::from_rd(self.rd)
    }

    pub const fn proleptic_greg(&self) -> GregorianDate {
        greg::proleptic_from_rd(self.rd)
    }

    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.month, self.year)
    }

    pub const fn days_in_year(&self) -> i64 {
        days_in_year(self.year)
    }

    /// Name of the month in the language given by `tag` ("en", "he",
    /// "he-x-NoNikud"). Unknown tags get the English name.
    pub fn month_name(&self, tag: &str) -> &'static str {
        let locale = tag.parse::<Locale>().unwrap_or_else(|_err| {
            debug!("no month names for locale {tag:?}, using English");
            Locale::En
        });
        self.month_name_in(locale)
    }

    /// Name of the month in `locale`, "Adar" rather than "Adar I" in a
    /// common year.
    pub fn month_name_in(&self, locale: Locale) -> &'static str {
        month_name(self.month, self.is_leap_year(), locale)
    }

    /// The date `days` days later (earlier if negative).
    pub fn add_days(&self, days: i64) -> Self {
        Self::from_rd(self.rd + days)
    }

    pub fn next(&self) -> Self {
        self.add_days(1)
    }

    pub fn prev(&self) -> Self {
        self.add_days(-1)
    }

    /// Days from `self` to `other`, negative if `other` is earlier.
    pub const fn days_until(&self, other: &Self) -> i64 {
        other.rd - self.rd
    }

    /// Latest day on or before `self` falling on `weekday`.
    pub fn on_or_before(&self, weekday: Weekday) -> Self {
        Self::from_rd(weekday_on_or_before(weekday, self.rd))
    }

    /// Latest day strictly before `self` falling on `weekday`.
    pub fn before(&self, weekday: Weekday) -> Self {
        Self::from_rd(weekday_on_or_before(weekday, self.rd - 1))
    }

    /// Earliest day on or after `self` falling on `weekday`.
    pub fn on_or_after(&self, weekday: Weekday) -> Self {
        Self::from_rd(weekday_on_or_before(weekday, self.rd + 6))
    }

    /// Earliest day strictly after `self` falling on `weekday`.
    pub fn after(&self, weekday: Weekday) -> Self {
        Self::from_rd(weekday_on_or_before(weekday, self.rd + 7))
    }

    /// Day falling on `weekday` closest to `self`.
    pub fn nearest(&self, weekday: Weekday) -> Self {
        Self::from_rd(weekday_on_or_before(weekday, self.rd + 3))
    }
}

/// RD of the latest `weekday` on or before `rd`.
pub const fn weekday_on_or_before(weekday: Weekday, rd: i64) -> i64 {
    rd - (rd - weekday.number_from_sunday() as i64).rem_euclid(DAYS_PER_WEEK)
}

impl PartialOrd for HDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rd.cmp(&other.rd)
    }
}

impl Sub for HDate {
    type Output = i64;

    fn sub(self, rhs: Self) -> Self::Output {
        self.rd - rhs.rd
    }
}

impl From<HDate> for GregorianDate {
    fn from(date: HDate) -> Self {
        date.greg()
    }
}

impl From<GregorianDate> for HDate {
    fn from(date: GregorianDate) -> Self {
        Self::from_time(&date)
    }
}

impl FromStr for HDate {
    type Err = HDateError;

    /// Parses the `Display` form, "<day> <month> <year>", where the month
    /// is any name [`month_from_name`] accepts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.is_empty() {
            return Err(HDateError::InvalidFormat("empty date string".to_owned()));
        }
        let [day, month @ .., year] = parts.as_slice() else {
            return Err(HDateError::InvalidFormat(s.trim().to_owned()));
        };
        if month.is_empty() {
            return Err(HDateError::InvalidFormat(format!(
                "expected \"<day> <month> <year>\", found {:?}",
                s.trim()
            )));
        }
        let day = day
            .parse::<u8>()
            .map_err(|_| HDateError::InvalidFormat(format!("bad day: {day}")))?;
        let year = year
            .parse::<i32>()
            .map_err(|_| HDateError::InvalidFormat(format!("bad year: {year}")))?;
        let month = month_from_name(&month.join(" "))?;
        Ok(Self::new(year, month, day))
    }
}
