/// Number of months in a Hijri year
pub const MONTHS_PER_YEAR: u8 = 12;

/// Highest 0-based month index (Dhu al-Hijjah)
pub const MAX_MONTH_INDEX: u8 = MONTHS_PER_YEAR - 1;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Length of a month with an even 0-based index (Muharram, Rabi' al-Awwal, ...)
pub const LONG_MONTH_DAYS: u8 = 30;
/// Length of a month with an odd 0-based index (Safar, Rabi' al-Thani, ...)
pub const SHORT_MONTH_DAYS: u8 = 29;
/// Length of Dhu al-Hijjah in a leap year
pub const LEAP_DHU_AL_HIJJAH_DAYS: u8 = 30;

/// Smallest adjustment; the shortened month keeps at least one day
#[allow(clippy::cast_lossless)]
pub const MIN_ADJUSTMENT_DAYS: i32 = MIN_DAY as i32 - SHORT_MONTH_DAYS as i32;
/// Largest adjustment; the lengthened month fits a `u8` day
#[allow(clippy::cast_lossless)]
pub const MAX_ADJUSTMENT_DAYS: i32 = u8::MAX as i32 - LONG_MONTH_DAYS as i32;

/// Base month lengths by 0-based index, before the leap-year rule and adjustments
pub const MONTH_LENGTHS: [u8; 12] = [
    LONG_MONTH_DAYS,  // Muharram
    SHORT_MONTH_DAYS, // Safar
    LONG_MONTH_DAYS,  // Rabi' al-Awwal
    SHORT_MONTH_DAYS, // Rabi' al-Thani
    LONG_MONTH_DAYS,  // Jumada al-Awwal
    SHORT_MONTH_DAYS, // Jumada al-Thani
    LONG_MONTH_DAYS,  // Rajab
    SHORT_MONTH_DAYS, // Sha'ban
    LONG_MONTH_DAYS,  // Ramadan
    SHORT_MONTH_DAYS, // Shawwal
    LONG_MONTH_DAYS,  // Dhu al-Qi'dah
    SHORT_MONTH_DAYS, // Dhu al-Hijjah (30 in leap years)
];

/// Years in one tabular cycle
pub const CYCLE_YEARS: i32 = 30;
/// Days in one tabular cycle (19 common years of 354 days, 11 leap years of 355)
pub const CYCLE_DAYS: i64 = 10631;

/// Offset applied to a year before taking its position in the cycle
pub(crate) const CYCLE_POSITION_OFFSET: i32 = 2;

/// 1-based cycle positions whose year has 355 days
pub const LEAP_POSITIONS: [u8; 11] = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];

/// Year lengths indexed by `cycle position - 1`; 355 exactly at [`LEAP_POSITIONS`]
pub const YEAR_LENGTHS: [u16; 30] = [
    354, 355, 354, 354, 355, 354, 355, 354, 354, 355, // positions 1-10
    354, 354, 355, 354, 354, 355, 354, 355, 354, 354, // positions 11-20
    355, 354, 354, 355, 354, 355, 354, 354, 355, 354, // positions 21-30
];

/// Julian Day of 1 Muharram 1 AH at midnight (16 July 622, Julian calendar)
pub const HIJRI_EPOCH: f64 = 1_948_439.5;

/// First Julian Day (integer part) counted in the Gregorian calendar
pub(crate) const GREGORIAN_REFORM_JDN: i64 = 2_299_161;
/// Gregorian reform date (year, month, day): 15 October 1582
pub(crate) const GREGORIAN_REFORM: (i32, u8, u8) = (1582, 10, 15);

/// Largest civil year magnitude accepted by conversions
pub const MAX_CIVIL_YEAR: i32 = 1_000_000;
/// Julian Days further than this from 0 are rejected before integer arithmetic
pub(crate) const JULIAN_DAY_LIMIT: f64 = 1.0e12;

/// Julian Day of 1970-01-01 at midnight
pub(crate) const UNIX_EPOCH_JD: f64 = 2_440_587.5;
pub(crate) const SECONDS_PER_DAY: u64 = 86_400;

/// Date component separator
pub const DATE_SEPARATOR: char = '-';

/// Arabic month names by 0-based index
pub const MONTH_NAMES_AR: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الثاني",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

/// English month names by 0-based index
pub const MONTH_NAMES_EN: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

/// Arabic weekday names, Sunday first
pub const DAY_NAMES_AR: [&str; 7] = [
    "الأحد",
    "الإثنين",
    "الثلاثاء",
    "الأربعاء",
    "الخميس",
    "الجمعة",
    "السبت",
];

/// English weekday names, Sunday first
pub const DAY_NAMES_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
