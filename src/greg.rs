//! Civil calendar bridge: absolute day numbers to and from Gregorian dates.
//!
//! Two readings of a civil date are supported. The *proleptic* Gregorian
//! calendar applies the Gregorian leap rule to every year. The *historical*
//! Gregorian calendar is Julian up to 2 September 1752 and Gregorian from
//! 14 September 1752 onward, the days in between never having existed.
//!
//! Years are astronomical in both (year 0 is 1 BCE). RD 1 is
//! 1 January 1 in the proleptic Gregorian calendar.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CENTURY_DAYS,
    GREGORIAN_CUTOVER, GREGORIAN_CYCLE, GREGORIAN_CYCLE_DAYS, LEAP_YEAR_CYCLE, MARCH,
    QUADRENNIUM_DAYS,
};
use crate::types::GregorianDate;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// RD of 1 January 1970, the Unix epoch.
pub(crate) const UNIX_EPOCH_RD: i64 = 719_163;
/// RD of the day before Julian 1 January 1.
const JULIAN_EPOCH_RD: i64 = -2;
const DAYS_PER_COMMON_YEAR: i64 = 365;
const NANOS_PER_DAY: i128 = 86_400 * 1_000_000_000;

pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

pub const fn is_julian_leap_year(year: i32) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == 0
}

/// Days in a Gregorian month. `month` must be 1..=12.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= 12);

    if month == FEBRUARY && is_gregorian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Days from the start of the year to the first of `month`, counting
/// February as 30 days. `leap` corrects for the real February.
const fn month_offset(month: u8, leap: bool) -> i64 {
    let month = month as i64;
    let correction = if month <= FEBRUARY as i64 {
        0
    } else if leap {
        -1
    } else {
        -2
    };
    (367 * month - 362).div_euclid(12) + correction
}

/// Month containing the `prior_days`-th day (0-based) of the year.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn month_of_year(prior_days: i64, past_february: bool, leap: bool) -> u8 {
    let correction = if !past_february {
        0
    } else if leap {
        1
    } else {
        2
    };
    (12 * (prior_days + correction) + 373).div_euclid(367) as u8
}

/// RD of a proleptic Gregorian date.
pub const fn proleptic_to_rd(year: i32, month: u8, day: u8) -> i64 {
    let prev = year as i64 - 1;
    DAYS_PER_COMMON_YEAR * prev
        + prev.div_euclid(LEAP_YEAR_CYCLE as i64)
        - prev.div_euclid(CENTURY_CYCLE as i64)
        + prev.div_euclid(GREGORIAN_CYCLE as i64)
        + month_offset(month, is_gregorian_leap_year(year))
        + day as i64
}

/// Proleptic Gregorian date of an RD.
pub const fn proleptic_from_rd(rd: i64) -> GregorianDate {
    let d0 = rd - 1;
    let n400 = d0.div_euclid(GREGORIAN_CYCLE_DAYS);
    let d1 = d0.rem_euclid(GREGORIAN_CYCLE_DAYS);
    let n100 = d1 / GREGORIAN_CENTURY_DAYS;
    let d2 = d1 % GREGORIAN_CENTURY_DAYS;
    let n4 = d2 / QUADRENNIUM_DAYS;
    let d3 = d2 % QUADRENNIUM_DAYS;
    let n1 = d3 / DAYS_PER_COMMON_YEAR;
    let mut year = 400 * n400 + 100 * n100 + 4 * n4 + n1;
    // the last day of a leap cycle belongs to the year just counted
    if n100 != 4 && n1 != 4 {
        year += 1;
    }
    #[allow(clippy::cast_possible_truncation)]
    let year = year as i32;

    let leap = is_gregorian_leap_year(year);
    let prior_days = rd - proleptic_to_rd(year, 1, 1);
    let month = month_of_year(prior_days, rd >= proleptic_to_rd(year, MARCH, 1), leap);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let day = (rd - proleptic_to_rd(year, month, 1) + 1) as u8;
    GregorianDate::new(year, month, day)
}

/// RD of a Julian calendar date.
pub const fn julian_to_rd(year: i32, month: u8, day: u8) -> i64 {
    let prev = year as i64 - 1;
    JULIAN_EPOCH_RD
        + DAYS_PER_COMMON_YEAR * prev
        + prev.div_euclid(LEAP_YEAR_CYCLE as i64)
        + month_offset(month, is_julian_leap_year(year))
        + day as i64
}

/// Julian calendar date of an RD.
pub const fn julian_from_rd(rd: i64) -> GregorianDate {
    #[allow(clippy::cast_possible_truncation)]
    let year = (4 * (rd - JULIAN_EPOCH_RD - 1) + 1464).div_euclid(QUADRENNIUM_DAYS) as i32;
    let leap = is_julian_leap_year(year);
    let prior_days = rd - julian_to_rd(year, 1, 1);
    let month = month_of_year(prior_days, rd >= julian_to_rd(year, MARCH, 1), leap);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let day = (rd - julian_to_rd(year, month, 1) + 1) as u8;
    GregorianDate::new(year, month, day)
}

/// RD of the first Gregorian day of the historical calendar.
pub const fn cutover_rd() -> i64 {
    let (year, month, day) = GREGORIAN_CUTOVER;
    proleptic_to_rd(year, month, day)
}

const fn is_after_cutover(year: i32, month: u8, day: u8) -> bool {
    let (cy, cm, cd) = GREGORIAN_CUTOVER;
    year > cy || (year == cy && (month > cm || (month == cm && day >= cd)))
}

/// RD of a historical Gregorian date: Julian before 14 September 1752.
pub const fn to_rd(year: i32, month: u8, day: u8) -> i64 {
    if is_after_cutover(year, month, day) {
        proleptic_to_rd(year, month, day)
    } else {
        julian_to_rd(year, month, day)
    }
}

/// Historical Gregorian date of an RD.
pub const fn from_rd(rd: i64) -> GregorianDate {
    if rd >= cutover_rd() {
        proleptic_from_rd(rd)
    } else {
        julian_from_rd(rd)
    }
}

/// Anything that carries a civil calendar date.
///
/// The date is read as a historical Gregorian date and nothing but its
/// year, month and day is used.
pub trait CivilDate {
    /// Year (astronomical), month (1..=12) and day of month.
    fn civil_ymd(&self) -> (i32, u8, u8);
}

impl CivilDate for GregorianDate {
    fn civil_ymd(&self) -> (i32, u8, u8) {
        (*self).into()
    }
}

impl CivilDate for (i32, u8, u8) {
    fn civil_ymd(&self) -> (i32, u8, u8) {
        *self
    }
}

/// The UTC calendar date of the instant.
impl CivilDate for SystemTime {
    fn civil_ymd(&self) -> (i32, u8, u8) {
        from_rd(system_time_rd(*self)).into()
    }
}

/// RD of the UTC day containing `time`.
pub(crate) fn system_time_rd(time: SystemTime) -> i64 {
    let nanos = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => duration_nanos(after),
        Err(before) => -duration_nanos(before.duration()),
    };
    rd_from_unix_nanos(nanos)
}

pub(crate) fn duration_nanos(duration: Duration) -> i128 {
    i128::try_from(duration.as_nanos()).unwrap_or(i128::MAX)
}

/// RD of the UTC day `nanos` nanoseconds after the Unix epoch.
pub(crate) fn rd_from_unix_nanos(nanos: i128) -> i64 {
    let days = i64::try_from(nanos.div_euclid(NANOS_PER_DAY)).unwrap_or(i64::MAX);
    UNIX_EPOCH_RD + days
}
