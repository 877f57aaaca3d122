/// RD of the day before 1 Tishrei of year 1, so that
/// `RD(1 Tishrei y) = HEBREW_EPOCH_RD + elapsed_days(y)`
pub const HEBREW_EPOCH_RD: i64 = -1_373_428;

/// Smallest supported Hebrew year
pub const MIN_YEAR: i32 = 1;

/// Length of the Metonic cycle in years
pub(crate) const METONIC_CYCLE_YEARS: i64 = 19;
/// Lunar months in one Metonic cycle (12 * 12 + 7 * 13)
pub(crate) const METONIC_CYCLE_MONTHS: i64 = 235;
/// Leap years per Metonic cycle
pub(crate) const LEAP_YEARS_PER_CYCLE: i64 = 7;

/// Parts (chalakim) in one hour
pub(crate) const PARTS_PER_HOUR: i64 = 1080;
/// Parts in one day
pub(crate) const PARTS_PER_DAY: i64 = 24 * PARTS_PER_HOUR;
/// Length of a mean lunar month in parts: 29d 12h 793p
pub(crate) const LUNAR_MONTH_PARTS: i64 = 29 * PARTS_PER_DAY + 12 * PARTS_PER_HOUR + 793;

/// Molad of Tishrei year 1 (BaHaRaD, 5h 204p into day 2), hours component
pub(crate) const MOLAD_BEHARAD_HOURS: i64 = 5;
/// Molad of Tishrei year 1, parts component
pub(crate) const MOLAD_BEHARAD_PARTS: i64 = 204;

/// Molad zaken: noon, 18 hours after the start of the day at 6 p.m.
pub(crate) const MOLAD_ZAKEN_PARTS: i64 = 18 * PARTS_PER_HOUR;
/// GaTaRaD: 9h 204p on a Tuesday of a common year
pub(crate) const GATARAD_PARTS: i64 = 9 * PARTS_PER_HOUR + 204;
/// BeTU'TaKPaT: 15h 589p on a Monday following a leap year
pub(crate) const BETUTAKPAT_PARTS: i64 = 15 * PARTS_PER_HOUR + 589;

/// Days in a week
pub const DAYS_PER_WEEK: i64 = 7;

/// Every valid Hebrew year length, common years first
pub const YEAR_LENGTHS: [i64; 6] = [353, 354, 355, 383, 384, 385];

/// Days in a full 400-year Gregorian cycle
pub(crate) const GREGORIAN_CYCLE_DAYS: i64 = 146_097;
/// Days in a Gregorian century that does not end in a leap year
pub(crate) const GREGORIAN_CENTURY_DAYS: i64 = 36_524;
/// Days in a four-year Julian/Gregorian cycle
pub(crate) const QUADRENNIUM_DAYS: i64 = 1461;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// First day on which the historical calendar is Gregorian (14 September 1752)
pub const GREGORIAN_CUTOVER: (i32, u8, u8) = (1752, 9, 14);

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March
pub const MARCH: u8 = 3;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
