//! Conversion between Hebrew (year, month, day) and absolute day numbers.

use crate::consts::{
    HEBREW_EPOCH_RD, LUNAR_MONTH_PARTS, METONIC_CYCLE_MONTHS, METONIC_CYCLE_YEARS, PARTS_PER_DAY,
};
use crate::epoch::{days_in_month, elapsed_days, is_leap_year};
use crate::types::HMonth;

/// RD of 1 Tishrei of `year`.
pub const fn new_year_rd(year: i32) -> i64 {
    HEBREW_EPOCH_RD + elapsed_days(year)
}

/// Absolute day number of a Hebrew date.
///
/// Adar II in a common year is read as Adar. `day` is not range checked:
/// day 0 is the last day of the previous month, and so on.
pub fn to_rd(year: i32, month: HMonth, day: i64) -> i64 {
    let month = month.normalize(is_leap_year(year));
    let preceding: i64 = HMonth::year_order(is_leap_year(year))
        .iter()
        .take_while(|&&m| m != month)
        .map(|&m| i64::from(days_in_month(m, year)))
        .sum();
    new_year_rd(year) + preceding + day - 1
}

/// Hebrew year containing `rd`.
pub fn year_of(rd: i64) -> i32 {
    // Mean year is 235 months of 29d 12h 793p spread over 19 years
    let days = rd - HEBREW_EPOCH_RD;
    let estimate = (days * METONIC_CYCLE_YEARS * PARTS_PER_DAY)
        .div_euclid(METONIC_CYCLE_MONTHS * LUNAR_MONTH_PARTS)
        + 1;
    #[allow(clippy::cast_possible_truncation)]
    let mut year = estimate as i32;

    while new_year_rd(year) > rd {
        crate::trace!("year estimate {year} for RD {rd} too late");
        year -= 1;
    }
    while new_year_rd(year + 1) <= rd {
        crate::trace!("year estimate {year} for RD {rd} too early");
        year += 1;
    }
    year
}

/// Hebrew (year, month, day) of an absolute day number.
///
/// Exact inverse of [`to_rd`] for normalized dates.
pub fn from_rd(rd: i64) -> (i32, HMonth, u8) {
    let year = year_of(rd);
    let mut offset = rd - new_year_rd(year);
    let mut month = HMonth::Tishrei;
    // year_of guarantees rd lies before the next 1 Tishrei, so the loop
    // always breaks inside the year
    for &candidate in HMonth::year_order(is_leap_year(year)) {
        month = candidate;
        let len = i64::from(days_in_month(month, year));
        if offset < len {
            break;
        }
        offset -= len;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let day = offset as u8 + 1;
    (year, month, day)
}
