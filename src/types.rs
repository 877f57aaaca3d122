use crate::HDateError;
use crate::consts::{DAYS_PER_WEEK, DATE_SEPARATOR};
use crate::prelude::*;
use std::fmt;

/// A Hebrew month slot.
///
/// Numbering starts at Nisan, following the biblical count, but the Hebrew
/// year itself starts at [`HMonth::Tishrei`]. `Adar2` only exists in leap
/// years; in a common year `Adar1` is simply "Adar".
///
/// `Display` gives the English name as used in a leap year ("Adar I",
/// "Adar II"). For a year-aware name use [`crate::month_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[repr(u8)]
pub enum HMonth {
    #[display(fmt = "Nisan")]
    Nisan = 1,
    #[display(fmt = "Iyyar")]
    Iyyar = 2,
    #[display(fmt = "Sivan")]
    Sivan = 3,
    #[display(fmt = "Tamuz")]
    Tamuz = 4,
    #[display(fmt = "Av")]
    Av = 5,
    #[display(fmt = "Elul")]
    Elul = 6,
    #[display(fmt = "Tishrei")]
    Tishrei = 7,
    #[display(fmt = "Cheshvan")]
    Cheshvan = 8,
    #[display(fmt = "Kislev")]
    Kislev = 9,
    #[display(fmt = "Tevet")]
    Tevet = 10,
    #[display(fmt = "Sh'vat")]
    Shvat = 11,
    #[display(fmt = "Adar I")]
    Adar1 = 12,
    #[display(fmt = "Adar II")]
    Adar2 = 13,
}

/// Months of a common year, in year order.
const COMMON_YEAR_ORDER: [HMonth; 12] = [
    HMonth::Tishrei,
    HMonth::Cheshvan,
    HMonth::Kislev,
    HMonth::Tevet,
    HMonth::Shvat,
    HMonth::Adar1,
    HMonth::Nisan,
    HMonth::Iyyar,
    HMonth::Sivan,
    HMonth::Tamuz,
    HMonth::Av,
    HMonth::Elul,
];

/// Months of a leap year, in year order.
const LEAP_YEAR_ORDER: [HMonth; 13] = [
    HMonth::Tishrei,
    HMonth::Cheshvan,
    HMonth::Kislev,
    HMonth::Tevet,
    HMonth::Shvat,
    HMonth::Adar1,
    HMonth::Adar2,
    HMonth::Nisan,
    HMonth::Iyyar,
    HMonth::Sivan,
    HMonth::Tamuz,
    HMonth::Av,
    HMonth::Elul,
];

impl HMonth {
    /// All months in numeric order (Nisan first)
    pub const ALL: [Self; 13] = [
        Self::Nisan,
        Self::Iyyar,
        Self::Sivan,
        Self::Tamuz,
        Self::Av,
        Self::Elul,
        Self::Tishrei,
        Self::Cheshvan,
        Self::Kislev,
        Self::Tevet,
        Self::Shvat,
        Self::Adar1,
        Self::Adar2,
    ];

    /// Returns the month number (Nisan = 1 ... Adar II = 13)
    #[inline]
    pub const fn get(self) -> u8 {
        self as u8
    }

    /// Collapses Adar II onto Adar I when the year has no second Adar.
    pub const fn normalize(self, leap: bool) -> Self {
        match self {
            Self::Adar2 if !leap => Self::Adar1,
            other => other,
        }
    }

    /// Months of a year in calendar order, starting at Tishrei.
    pub fn year_order(leap: bool) -> &'static [Self] {
        if leap {
            &LEAP_YEAR_ORDER
        } else {
            &COMMON_YEAR_ORDER
        }
    }
}

impl TryFrom<u8> for HMonth {
    type Error = HDateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        value
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(usize::from(idx)))
            .copied()
            .ok_or(HDateError::InvalidMonth(value))
    }
}

impl From<HMonth> for u8 {
    fn from(month: HMonth) -> Self {
        month.get()
    }
}

/// Day of the week, numbered from Sunday = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Weekday of an absolute day number. RD 0 is a Sunday.
    pub const fn from_rd(rd: i64) -> Self {
        // rem_euclid keeps the index in 0..7 for negative day numbers too
        Self::ALL[rd.rem_euclid(DAYS_PER_WEEK) as usize]
    }

    /// Offset from Sunday (0..=6)
    #[inline]
    pub const fn number_from_sunday(self) -> u8 {
        self as u8
    }
}

/// Classification of a Hebrew year by its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum YearType {
    /// 353 or 383 days: Cheshvan and Kislev both have 29 days
    #[display(fmt = "deficient")]
    Deficient,
    /// 354 or 384 days: Cheshvan 29, Kislev 30
    #[display(fmt = "regular")]
    Regular,
    /// 355 or 385 days: Cheshvan and Kislev both have 30 days
    #[display(fmt = "complete")]
    Complete,
}

/// A civil (Gregorian or proleptic Gregorian) calendar date.
///
/// Years are astronomical: year 0 is 1 BCE. The value is not validated; it
/// is what the civil bridge produces, or what a caller hands to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Month of the year, 1..=12
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{sep}{:02}{sep}{:02}",
            self.year,
            self.month,
            self.day,
            sep = DATE_SEPARATOR
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_numbers() {
        assert_eq!(HMonth::Nisan.get(), 1);
        assert_eq!(HMonth::Tishrei.get(), 7);
        assert_eq!(HMonth::Adar2.get(), 13);
        for (idx, month) in HMonth::ALL.iter().enumerate() {
            assert_eq!(usize::from(month.get()), idx + 1, "{month:?} out of order");
        }
    }

    #[test]
    fn test_month_try_from_u8() {
        let month: HMonth = 8.try_into().unwrap();
        assert_eq!(month, HMonth::Cheshvan);

        let result: Result<HMonth, _> = 0.try_into();
        assert!(matches!(result, Err(HDateError::InvalidMonth(0))));

        let result: Result<HMonth, _> = 14.try_into();
        assert!(matches!(result, Err(HDateError::InvalidMonth(14))));
    }

    #[test]
    fn test_month_into_u8() {
        let value: u8 = HMonth::Shvat.into();
        assert_eq!(value, 11);
    }

    #[test]
    fn test_month_display() {
        assert_eq!(HMonth::Nisan.to_string(), "Nisan");
        assert_eq!(HMonth::Tishrei.to_string(), "Tishrei");
        assert_eq!(HMonth::Shvat.to_string(), "Sh'vat");
        assert_eq!(HMonth::Adar1.to_string(), "Adar I");
        assert_eq!(HMonth::Adar2.to_string(), "Adar II");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(HMonth::Adar2.normalize(false), HMonth::Adar1);
        assert_eq!(HMonth::Adar2.normalize(true), HMonth::Adar2);
        assert_eq!(HMonth::Adar1.normalize(false), HMonth::Adar1);
        for month in HMonth::ALL {
            if month != HMonth::Adar2 {
                assert_eq!(month.normalize(false), month);
                assert_eq!(month.normalize(true), month);
            }
        }
    }

    #[test]
    fn test_year_order() {
        let common = HMonth::year_order(false);
        let leap = HMonth::year_order(true);
        assert_eq!(common.len(), 12);
        assert_eq!(leap.len(), 13);
        assert_eq!(common[0], HMonth::Tishrei);
        assert_eq!(leap[0], HMonth::Tishrei);
        assert_eq!(common[11], HMonth::Elul);
        assert_eq!(leap[12], HMonth::Elul);
        assert!(!common.contains(&HMonth::Adar2));
        assert_eq!(leap[6], HMonth::Adar2);
    }

    #[test]
    fn test_weekday_from_rd() {
        assert_eq!(Weekday::from_rd(0), Weekday::Sunday);
        assert_eq!(Weekday::from_rd(1), Weekday::Monday);
        assert_eq!(Weekday::from_rd(-1), Weekday::Saturday);
        assert_eq!(Weekday::from_rd(-7), Weekday::Sunday);
        assert_eq!(Weekday::from_rd(6), Weekday::Saturday);
    }

    #[test]
    fn test_weekday_cycle() {
        for rd in (-10_000..10_000).step_by(13) {
            assert_eq!(
                Weekday::from_rd(rd + 7),
                Weekday::from_rd(rd),
                "weekday of RD {rd} differs a week later"
            );
        }
    }

    #[test]
    fn test_weekday_display() {
        assert_eq!(Weekday::Saturday.to_string(), "Saturday");
        assert_eq!(Weekday::Wednesday.number_from_sunday(), 3);
    }

    #[test]
    fn test_gregorian_date_display() {
        assert_eq!(GregorianDate::new(2014, 2, 19).to_string(), "2014-02-19");
        assert_eq!(GregorianDate::new(1752, 9, 2).to_string(), "1752-09-02");
    }

    #[test]
    fn test_gregorian_date_tuple_conversions() {
        let date: GregorianDate = (2005, 4, 2).into();
        assert_eq!(date, GregorianDate::new(2005, 4, 2));
        let (y, m, d): (i32, u8, u8) = date.into();
        assert_eq!((y, m, d), (2005, 4, 2));
    }

    #[test]
    fn test_gregorian_date_ordering() {
        assert!(GregorianDate::new(1752, 9, 2) < GregorianDate::new(1752, 9, 14));
        assert!(GregorianDate::new(1751, 12, 31) < GregorianDate::new(1752, 1, 1));
    }
}
