//! Elapsed-day arithmetic for the start of a Hebrew year.
//!
//! Everything here is expressed as a count of days since the Hebrew epoch,
//! with `elapsed_days(1) == 1`. Add [`crate::HEBREW_EPOCH_RD`] to get an RD.

use crate::consts::{
    BETUTAKPAT_PARTS, DAYS_PER_WEEK, GATARAD_PARTS, LEAP_YEARS_PER_CYCLE, METONIC_CYCLE_MONTHS,
    METONIC_CYCLE_YEARS, MOLAD_BEHARAD_HOURS, MOLAD_BEHARAD_PARTS, MOLAD_ZAKEN_PARTS,
    PARTS_PER_HOUR,
};
use crate::types::{HMonth, YearType};

/// Hours in a mean lunar month beyond whole days (29d 12h 793p).
const MONTH_EXTRA_HOURS: i64 = 12;
/// Parts in a mean lunar month beyond whole hours.
const MONTH_EXTRA_PARTS: i64 = 793;
/// Whole days in a mean lunar month.
const MONTH_WHOLE_DAYS: i64 = 29;
const HOURS_PER_DAY: i64 = 24;

/// True if `year` has thirteen months.
pub const fn is_leap_year(year: i32) -> bool {
    (LEAP_YEARS_PER_CYCLE * year as i64 + 1).rem_euclid(METONIC_CYCLE_YEARS) < LEAP_YEARS_PER_CYCLE
}

/// 12 in a common year, 13 in a leap year.
pub const fn months_in_year(year: i32) -> u8 {
    if is_leap_year(year) { 13 } else { 12 }
}

/// Lunar months from the epoch to the start of `year`.
pub const fn elapsed_months(year: i32) -> i64 {
    let prev = year as i64 - 1;
    let cycles = prev.div_euclid(METONIC_CYCLE_YEARS);
    let year_in_cycle = prev.rem_euclid(METONIC_CYCLE_YEARS);
    METONIC_CYCLE_MONTHS * cycles
        + 12 * year_in_cycle
        + (LEAP_YEARS_PER_CYCLE * year_in_cycle + 1) / METONIC_CYCLE_YEARS
}

/// Days from the epoch to 1 Tishrei of `year`, counting the epoch day as 1.
///
/// Starts from the molad of Tishrei and applies the postponements:
/// molad zaken, GaTaRaD, BeTU'TaKPaT and finally lo ADU rosh.
pub const fn elapsed_days(year: i32) -> i64 {
    let months = elapsed_months(year);
    let parts_elapsed = MOLAD_BEHARAD_PARTS + MONTH_EXTRA_PARTS * months.rem_euclid(PARTS_PER_HOUR);
    let hours_elapsed = MOLAD_BEHARAD_HOURS
        + MONTH_EXTRA_HOURS * months
        + MONTH_EXTRA_PARTS * months.div_euclid(PARTS_PER_HOUR)
        + parts_elapsed / PARTS_PER_HOUR;

    let conjunction_day = 1 + MONTH_WHOLE_DAYS * months + hours_elapsed.div_euclid(HOURS_PER_DAY);
    let conjunction_parts =
        PARTS_PER_HOUR * hours_elapsed.rem_euclid(HOURS_PER_DAY) + parts_elapsed % PARTS_PER_HOUR;
    let weekday = conjunction_day.rem_euclid(DAYS_PER_WEEK);

    let postponed = conjunction_parts >= MOLAD_ZAKEN_PARTS
        || (weekday == 2 && conjunction_parts >= GATARAD_PARTS && !is_leap_year(year))
        || (weekday == 1 && conjunction_parts >= BETUTAKPAT_PARTS && is_leap_year(year - 1));
    let day = if postponed { conjunction_day + 1 } else { conjunction_day };

    // Sunday, Wednesday and Friday are never Rosh Hashanah
    match day.rem_euclid(DAYS_PER_WEEK) {
        0 | 3 | 5 => day + 1,
        _ => day,
    }
}

/// Length of `year` in days: one of 353, 354, 355, 383, 384 or 385.
pub const fn days_in_year(year: i32) -> i64 {
    elapsed_days(year + 1) - elapsed_days(year)
}

/// True if Cheshvan has 30 days in `year`.
pub const fn long_cheshvan(year: i32) -> bool {
    days_in_year(year) % 10 == 5
}

/// True if Kislev has 29 days in `year`.
pub const fn short_kislev(year: i32) -> bool {
    days_in_year(year) % 10 == 3
}

pub const fn year_type(year: i32) -> YearType {
    if long_cheshvan(year) {
        YearType::Complete
    } else if short_kislev(year) {
        YearType::Deficient
    } else {
        YearType::Regular
    }
}

/// Number of days in `month` of `year`.
///
/// Adar II asked of a common year answers for the single Adar.
pub const fn days_in_month(month: HMonth, year: i32) -> u8 {
    match month.normalize(is_leap_year(year)) {
        HMonth::Iyyar | HMonth::Tamuz | HMonth::Elul | HMonth::Tevet | HMonth::Adar2 => 29,
        HMonth::Adar1 if !is_leap_year(year) => 29,
        HMonth::Cheshvan if !long_cheshvan(year) => 29,
        HMonth::Kislev if short_kislev(year) => 29,
        _ => 30,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::YEAR_LENGTHS;

    #[test]
    fn test_elapsed_days_reference_values() {
        let cases: [(i32, i64); 13] = [
            (5780, 2_110_760),
            (5708, 2_084_447),
            (3762, 1_373_677),
            (3671, 1_340_455),
            (1234, 450_344),
            (123, 44_563),
            (2, 356),
            (1, 1),
            (5762, 2_104_174),
            (5763, 2_104_528),
            (5764, 2_104_913),
            (5765, 2_105_268),
            (5766, 2_105_651),
        ];
        for (year, expected) in cases {
            assert_eq!(elapsed_days(year), expected, "elapsed_days({year})");
        }
    }

    #[test]
    fn test_is_leap_year() {
        // 3, 6, 8, 11, 14, 17 and 19 of each cycle
        let leaps: Vec<i32> = (1..=19).filter(|&y| is_leap_year(y)).collect();
        assert_eq!(leaps, vec![3, 6, 8, 11, 14, 17, 19]);

        assert!(is_leap_year(5779));
        assert!(!is_leap_year(5780));
        assert!(!is_leap_year(5781));
        assert!(is_leap_year(5782));
        assert!(!is_leap_year(5783));
        assert!(is_leap_year(5784));
    }

    #[test]
    fn test_months_in_year() {
        assert_eq!(months_in_year(5782), 13);
        assert_eq!(months_in_year(5783), 12);
    }

    #[test]
    fn test_elapsed_months() {
        assert_eq!(elapsed_months(1), 0);
        assert_eq!(elapsed_months(2), 12);
        assert_eq!(elapsed_months(20), 235);
        assert_eq!(elapsed_months(39), 470);
    }

    #[test]
    fn test_days_in_year() {
        let cases: [(i32, i64); 23] = [
            (5779, 385),
            (5780, 355),
            (5781, 353),
            (5782, 384),
            (5783, 355),
            (5784, 383),
            (5785, 355),
            (5786, 354),
            (5787, 385),
            (5788, 355),
            (5789, 354),
            (3762, 383),
            (3671, 354),
            (1234, 353),
            (123, 355),
            (2, 355),
            (1, 355),
            (5761, 353),
            (5762, 354),
            (5763, 385),
            (5764, 355),
            (5765, 383),
            (5766, 354),
        ];
        for (year, expected) in cases {
            assert_eq!(days_in_year(year), expected, "days_in_year({year})");
        }
    }

    #[test]
    fn test_year_length_closure() {
        for year in 1..=9999 {
            let len = days_in_year(year);
            assert!(
                YEAR_LENGTHS.contains(&len),
                "year {year} has impossible length {len}"
            );
            assert_eq!(
                is_leap_year(year),
                len > 380,
                "year {year} of length {len} disagrees with leap status"
            );
        }
    }

    #[test]
    fn test_rosh_hashanah_weekday() {
        // elapsed day 1 is a Monday, so day % 7 == 1 is Monday
        for year in 1..=9999 {
            let dow = elapsed_days(year) % DAYS_PER_WEEK;
            assert!(
                matches!(dow, 1 | 2 | 4 | 6),
                "1 Tishrei {year} falls on forbidden weekday {dow}"
            );
        }
    }

    #[test]
    fn test_year_type() {
        assert_eq!(year_type(5779), YearType::Complete);
        assert_eq!(year_type(5781), YearType::Deficient);
        assert_eq!(year_type(5786), YearType::Regular);
        assert_eq!(year_type(5784), YearType::Deficient);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(HMonth::Iyyar, 5780), 29);
        assert_eq!(days_in_month(HMonth::Sivan, 5780), 30);
        assert_eq!(days_in_month(HMonth::Cheshvan, 5782), 29);
        assert_eq!(days_in_month(HMonth::Cheshvan, 5783), 30);
        assert_eq!(days_in_month(HMonth::Kislev, 5783), 30);
        assert_eq!(days_in_month(HMonth::Kislev, 5784), 29);

        assert_eq!(days_in_month(HMonth::Tishrei, 5765), 30);
        assert_eq!(days_in_month(HMonth::Cheshvan, 5765), 29);
        assert_eq!(days_in_month(HMonth::Kislev, 5765), 29);
        assert_eq!(days_in_month(HMonth::Tevet, 5765), 29);
    }

    #[test]
    fn test_days_in_month_adar() {
        // 5782 is leap, 5783 is not
        assert_eq!(days_in_month(HMonth::Adar1, 5782), 30);
        assert_eq!(days_in_month(HMonth::Adar2, 5782), 29);
        assert_eq!(days_in_month(HMonth::Adar1, 5783), 29);
        assert_eq!(days_in_month(HMonth::Adar2, 5783), 29);
    }

    #[test]
    fn test_months_sum_to_year_length() {
        for year in (1..=9999).step_by(7) {
            let total: i64 = HMonth::year_order(is_leap_year(year))
                .iter()
                .map(|&m| i64::from(days_in_month(m, year)))
                .sum();
            assert_eq!(total, days_in_year(year), "month lengths of {year}");
        }
    }
}
