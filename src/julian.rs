//! Julian Day Number arithmetic and the civil (Julian/Gregorian) calendar.
//!
//! Civil dates before 15 October 1582 are read in the Julian calendar, later
//! ones in the Gregorian calendar. Years use historical numbering: there is no
//! year 0, and 1 BC is year -1.

use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::consts::{
    DATE_SEPARATOR, GREGORIAN_REFORM, GREGORIAN_REFORM_JDN, JULIAN_DAY_LIMIT, MAX_CIVIL_YEAR,
    SECONDS_PER_DAY, UNIX_EPOCH_JD,
};
use crate::{ParseError, RangeError, Weekday, prelude::*};

/// A Julian Day Number. Civil days start on the `.5` boundary.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Into)]
#[display(fmt = "{}", _0)]
pub struct JulianDay(f64);

impl JulianDay {
    /// Wraps a raw Julian Day value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw Julian Day value
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Shifts the Julian Day by whole days
    #[allow(clippy::cast_precision_loss)]
    pub fn add_days(self, days: i64) -> Self {
        Self(self.0 + days as f64)
    }

    /// Whole days from `earlier` to `self` (negative if `self` is earlier)
    #[allow(clippy::cast_possible_truncation)]
    pub fn days_since(self, earlier: Self) -> i64 {
        (self.0 - earlier.0).round() as i64
    }

    /// Finite and close enough to 0 for whole-day integer arithmetic
    pub(crate) fn is_supported(self) -> bool {
        self.0.is_finite() && self.0.abs() <= JULIAN_DAY_LIMIT
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn weekday(self) -> Weekday {
        Weekday::from_sunday_offset((self.0 + 1.5).floor() as i64)
    }

    /// Julian Day of the current instant's UTC civil day, at midnight
    #[allow(clippy::cast_precision_loss)]
    pub fn today() -> Self {
        let days = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_secs() / SECONDS_PER_DAY).unwrap_or(i64::MAX),
            Err(err) => i64::try_from(err.duration().as_secs().div_ceil(SECONDS_PER_DAY))
                .map_or(i64::MIN, |days| -days),
        };
        Self(UNIX_EPOCH_JD + days as f64)
    }
}

/// Julian Day of a civil date. `month` is 1-based.
///
/// Dates on or after 1582-10-15 get the Gregorian century correction; earlier
/// dates are taken as Julian calendar dates. The fields are not validated.
#[allow(clippy::cast_precision_loss)]
pub fn gregorian_to_julian_day(year: i32, month: u8, day: u8) -> JulianDay {
    let gregorian = (year, month, day) >= GREGORIAN_REFORM;

    // astronomical numbering: 1 BC is year 0
    let year = i64::from(year);
    let mut y = if year < 0 { year + 1 } else { year };
    let mut m = i64::from(month);
    if m < 3 {
        y -= 1;
        m += 12;
    }

    let a = y.div_euclid(100);
    let b = if gregorian { 2 - a + a.div_euclid(4) } else { 0 };

    let whole_days = (365.25 * (y + 4716) as f64).floor() + (30.6001 * (m + 1) as f64).floor();
    JulianDay(whole_days + f64::from(day) + b as f64 - 1524.5)
}

/// Civil date `(year, month, day)` of a Julian Day, `month` 1-based.
///
/// Follows Meeus, switching to the Julian calendar before JDN 2299161. The
/// result never contains year 0.
///
/// # Errors
/// Returns `RangeError::YearOverflow` for a non-finite Julian Day or one whose
/// year is beyond [`MAX_CIVIL_YEAR`].
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn julian_day_to_gregorian(jd: JulianDay) -> Result<(i32, u8, u8), RangeError> {
    if !jd.is_supported() {
        return Err(RangeError::YearOverflow);
    }
    let z = (jd.get() + 0.5).floor() as i64;

    let a = if z < GREGORIAN_REFORM_JDN {
        z
    } else {
        let alpha = ((z as f64 - 1_867_216.25) / 36_524.25).floor() as i64;
        z + 1 + alpha - alpha.div_euclid(4)
    };

    let b = a + 1524;
    let c = ((b as f64 - 122.1) / 365.25).floor() as i64;
    let d = (365.25 * c as f64).floor() as i64;
    let e = ((b - d) as f64 / 30.6001).floor() as i64;

    let day = b - d - (30.6001 * e as f64).floor() as i64;
    let month = if e > 13 { e - 13 } else { e - 1 };
    let mut year = if month > 2 { c - 4716 } else { c - 4715 };
    if year <= 0 {
        year -= 1;
    }
    if year.abs() > i64::from(MAX_CIVIL_YEAR) {
        return Err(RangeError::YearOverflow);
    }

    Ok((year as i32, month as u8, day as u8))
}

/// A validated civil calendar date (Julian before the 1582 reform, Gregorian after).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Creates a civil date, `month` 1-based.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidGregorianDate` for year 0, a year beyond
    /// [`MAX_CIVIL_YEAR`], a month outside 1-12, a day the month does not have,
    /// or a day skipped by the 1582 reform.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, RangeError> {
        let invalid = RangeError::InvalidGregorianDate { year, month, day };
        if year == 0
            || !(-MAX_CIVIL_YEAR..=MAX_CIVIL_YEAR).contains(&year)
            || !(1..=12).contains(&month)
            || day == 0
        {
            return Err(invalid);
        }
        // an impossible day lands on another date once mapped through the JDN
        let mapped = julian_day_to_gregorian(gregorian_to_julian_day(year, month, day));
        if mapped != Ok((year, month, day)) {
            return Err(invalid);
        }
        Ok(Self { year, month, day })
    }

    /// The civil date containing a Julian Day.
    ///
    /// # Errors
    /// See [`julian_day_to_gregorian`].
    pub fn from_julian_day(jd: JulianDay) -> Result<Self, RangeError> {
        let (year, month, day) = julian_day_to_gregorian(jd)?;
        Ok(Self { year, month, day })
    }

    /// Today's civil date in UTC.
    ///
    /// # Errors
    /// Returns `RangeError::YearOverflow` only if the system clock is beyond
    /// [`MAX_CIVIL_YEAR`].
    pub fn today() -> Result<Self, RangeError> {
        Self::from_julian_day(JulianDay::today())
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// 1-based month
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Julian Day at the start of this date
    pub fn julian_day(&self) -> JulianDay {
        gregorian_to_julian_day(self.year, self.month, self.day)
    }

    /// Date `days` civil days later (earlier when negative).
    ///
    /// # Errors
    /// Returns `RangeError::YearOverflow` if the result is beyond [`MAX_CIVIL_YEAR`].
    pub fn add_days(&self, days: i64) -> Result<Self, RangeError> {
        Self::from_julian_day(self.julian_day().add_days(days))
    }

    pub fn weekday(&self) -> Weekday {
        self.julian_day().weekday()
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD`, with a leading `-` for years before 1 AD
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let parts: Vec<&str> = body.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        };

        let invalid = || ParseError::InvalidFormat(s.to_owned());
        let year: i32 = parse_digits(year).ok_or_else(invalid)?;
        let month: u8 = parse_digits(month).ok_or_else(invalid)?;
        let day: u8 = parse_digits(day).ok_or_else(invalid)?;

        let year = if negative { -year } else { year };
        Ok(Self::new(year, month, day)?)
    }
}

/// Parses a non-empty run of ASCII digits
fn parse_digits<T: FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
