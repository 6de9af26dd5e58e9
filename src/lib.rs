//! Hijri (Islamic) calendar dates on the tabular 30-year cycle.
//!
//! Dates convert to and from the civil calendar through the Julian Day
//! Number. Local month-start variance is modelled with [`AdjustmentRule`]s
//! held by a [`HijriCalendar`].
//!
//! ```
//! use hijri_date::{GregorianDate, HijriDate, HijriMonth};
//!
//! let date = HijriDate::new(1444, HijriMonth::Ramadan, 1).unwrap();
//! assert_eq!(date.to_gregorian(), GregorianDate::new(2023, 3, 23));
//! assert_eq!(date.format(Some("yyyy/MM/dd")), "1444/09/01");
//! ```

mod adjustment;
mod calendar;
mod consts;
pub mod cycle;
pub mod julian;
mod prelude;
mod types;

pub use adjustment::{AdjustmentRule, Adjustments};
pub use calendar::HijriCalendar;
pub use consts::*;
pub use julian::{GregorianDate, JulianDay};
pub use types::{HijriMonth, Weekday};

use crate::prelude::*;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A day in the tabular Hijri calendar.
///
/// The value also carries the [`HijriCalendar`] it was built with, and every
/// conversion of this date uses that calendar's adjustments. Equality,
/// ordering and hashing look at the year, month and day only.
#[derive(Debug, Clone, Display)]
#[display(fmt = "{}-{}-{}", year, "month.number()", day)]
pub struct HijriDate {
    year: i32,
    month: HijriMonth,
    day: u8,
    calendar: HijriCalendar,
}

/// A date component outside its valid range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// 0-based month index above 11.
    #[error("Month must be between 0 and 11, got {0}")]
    InvalidMonth(u8),

    /// Day outside the (adjusted) length of its month.
    #[error("Day must be between 1 and {max} for month {month} in year {year}, got {day}")]
    InvalidDay {
        year: i32,
        month: u8,
        day: u8,
        max: u8,
    },

    /// Civil date that does not exist.
    #[error("Invalid civil date {year}-{month:02}-{day:02}")]
    InvalidGregorianDate { year: i32, month: u8, day: u8 },

    /// Adjustment offset that would leave a month outside 1 to 255 days.
    #[error("Adjustment must keep months between 1 and 255 days, got {0}")]
    InvalidAdjustment(i32),

    /// Year outside the supported range.
    #[error("Year is outside the supported range")]
    YearOverflow,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0:?} (expected yyyy-MM-dd)")]
    InvalidFormat(String),
    #[display(fmt = "Month must be between 1 and 12 in the input string, got {_0}")]
    InvalidMonth(u8),
    #[display(fmt = "{_0}")]
    Range(RangeError),
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Range(err) => Some(err),
            Self::InvalidFormat(_) | Self::InvalidMonth(_) => None,
        }
    }
}

impl From<RangeError> for ParseError {
    fn from(err: RangeError) -> Self {
        Self::Range(err)
    }
}

/// Pattern tokens understood by [`HijriDate::format`], longest first
const FORMAT_TOKENS: [&str; 6] = ["yyyy", "yy", "MM", "M", "dd", "d"];

const MAX_YEAR_DIGITS: usize = 4;
const MAX_MONTH_DIGITS: usize = 2;
const MAX_DAY_DIGITS: usize = 2;

impl HijriDate {
    /// Creates a date on the unadjusted calendar.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidDay` if `day` is not in the month.
    pub fn new(year: i32, month: HijriMonth, day: u8) -> Result<Self, RangeError> {
        HijriCalendar::new().date(year, month, day)
    }

    /// Creates a date from a 0-based month index on the unadjusted calendar.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidMonth` for an index above 11 and
    /// `RangeError::InvalidDay` if `day` is not in the month.
    pub fn from_ymd(year: i32, month_index: u8, day: u8) -> Result<Self, RangeError> {
        HijriCalendar::new().from_ymd(year, month_index, day)
    }

    /// Today's date on the unadjusted calendar, taken from the UTC civil date.
    ///
    /// # Errors
    /// Never fails on the unadjusted calendar; the `Result` mirrors
    /// [`HijriCalendar::today`].
    pub fn now() -> Result<Self, RangeError> {
        HijriCalendar::new().today()
    }

    /// # Errors
    /// Never fails on the unadjusted calendar; see [`HijriCalendar::from_gregorian`].
    pub fn from_gregorian(date: GregorianDate) -> Result<Self, RangeError> {
        HijriCalendar::new().from_gregorian(date)
    }

    /// # Errors
    /// Returns `RangeError::YearOverflow` for a Julian Day that is not finite
    /// or whose year does not fit `i32`; see [`HijriCalendar::from_julian_day`].
    pub fn from_julian_day(jd: JulianDay) -> Result<Self, RangeError> {
        HijriCalendar::new().from_julian_day(jd)
    }

    /// Parses `yyyy-MM-dd` on the unadjusted calendar.
    ///
    /// # Errors
    /// See [`HijriCalendar::parse`].
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        HijriCalendar::new().parse(text)
    }

    pub(crate) fn from_parts(
        year: i32,
        month: HijriMonth,
        day: u8,
        calendar: HijriCalendar,
    ) -> Self {
        Self {
            year,
            month,
            day,
            calendar,
        }
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> HijriMonth {
        self.month
    }

    /// 0-based month index
    #[inline]
    pub const fn month_index(&self) -> u8 {
        self.month.index()
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// The calendar whose adjustments this date resolves through
    pub const fn calendar(&self) -> &HijriCalendar {
        &self.calendar
    }

    pub fn is_leap_year(&self) -> bool {
        cycle::is_leap_year(self.year)
    }

    /// Adjusted number of days in this date's month
    pub fn length_of_month(&self) -> u8 {
        self.calendar.days_in_month(self.year, self.month)
    }

    pub fn julian_day(&self) -> JulianDay {
        self.calendar.to_julian_day(self.year, self.month, self.day)
    }

    /// The civil date this day falls on.
    ///
    /// # Errors
    /// Returns `RangeError::YearOverflow` if the civil year is beyond
    /// [`MAX_CIVIL_YEAR`], which needs a Hijri year of roughly a million.
    pub fn to_gregorian(&self) -> Result<GregorianDate, RangeError> {
        GregorianDate::from_julian_day(self.julian_day())
    }

    pub fn weekday(&self) -> Weekday {
        self.julian_day().weekday()
    }

    /// Arabic month name
    pub const fn month_name(&self) -> &'static str {
        self.month.name_ar()
    }

    pub const fn month_name_en(&self) -> &'static str {
        self.month.name_en()
    }

    /// Arabic weekday name
    pub fn day_name(&self) -> &'static str {
        self.weekday().name_ar()
    }

    pub fn day_name_en(&self) -> &'static str {
        self.weekday().name_en()
    }

    /// Moves by civil days through the Gregorian calendar.
    ///
    /// The date is converted with its calendar's adjustments, but the way back
    /// from the civil date follows the cycle alone. On an adjusted calendar the
    /// result can therefore differ from plain day counting: with Ramadan
    /// lengthened by one day, `plus_days(0)` on 15 Ramadan gives 16 Ramadan.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidDay` when the target falls past the end of
    /// a month shortened by an adjustment, and `RangeError::YearOverflow` when
    /// the target is beyond [`MAX_CIVIL_YEAR`].
    pub fn plus_days(&self, days: i64) -> Result<Self, RangeError> {
        let target = self.to_gregorian()?.add_days(days)?;
        self.calendar.from_gregorian(target)
    }

    /// Moves by whole months; a day past the end of the target month is
    /// clamped to its last day.
    ///
    /// # Errors
    /// Returns `RangeError::YearOverflow` if the year leaves `i32`.
    pub fn plus_months(&self, months: i64) -> Result<Self, RangeError> {
        let total = (i64::from(self.year) * i64::from(MONTHS_PER_YEAR) + i64::from(self.month.index()))
            .checked_add(months)
            .ok_or(RangeError::YearOverflow)?;

        let months_per_year = i64::from(MONTHS_PER_YEAR);
        let year =
            i32::try_from(total.div_euclid(months_per_year)).map_err(|_| RangeError::YearOverflow)?;
        let index = u8::try_from(total.rem_euclid(months_per_year)).map_err(|_| RangeError::YearOverflow)?;

        self.clamped(year, HijriMonth::from_index(index)?)
    }

    /// Moves by whole years, clamping the day like [`Self::plus_months`].
    ///
    /// # Errors
    /// Returns `RangeError::YearOverflow` if the year leaves `i32`.
    pub fn plus_years(&self, years: i32) -> Result<Self, RangeError> {
        let year = self.year.checked_add(years).ok_or(RangeError::YearOverflow)?;
        self.clamped(year, self.month)
    }

    fn clamped(&self, year: i32, month: HijriMonth) -> Result<Self, RangeError> {
        let day = self.day.min(self.calendar.days_in_month(year, month));
        self.calendar.date(year, month, day)
    }

    #[must_use]
    pub fn start_of_month(&self) -> Self {
        Self::from_parts(self.year, self.month, MIN_DAY, self.calendar.clone())
    }

    #[must_use]
    pub fn end_of_month(&self) -> Self {
        Self::from_parts(self.year, self.month, self.length_of_month(), self.calendar.clone())
    }

    /// -1, 0 or 1 as `self` is before, equal to or after `other`
    pub fn compare_to(&self, other: &Self) -> i8 {
        self.cmp(other) as i8
    }

    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    /// Absolute number of days between two dates
    pub fn days_between(start: &Self, end: &Self) -> i64 {
        end.julian_day().days_since(start.julian_day()).abs()
    }

    /// Formats with `yyyy`, `yy`, `MM`, `M`, `dd` and `d`; other characters are
    /// copied. Without a pattern this is `{year}-{month}-{day}` with a 1-based month.
    pub fn format(&self, pattern: Option<&str>) -> String {
        let Some(pattern) = pattern else {
            return self.to_string();
        };

        let mut out = String::with_capacity(pattern.len() + 4);
        let mut rest = pattern;
        'scan: while !rest.is_empty() {
            for token in FORMAT_TOKENS {
                if let Some(tail) = rest.strip_prefix(token) {
                    out.push_str(&self.format_token(token));
                    rest = tail;
                    continue 'scan;
                }
            }
            let mut chars = rest.chars();
            if let Some(ch) = chars.next() {
                out.push(ch);
            }
            rest = chars.as_str();
        }
        out
    }

    fn format_token(&self, token: &str) -> String {
        match token {
            "yyyy" => format!("{:04}", self.year),
            "yy" => format!("{:02}", self.year.rem_euclid(100)),
            "MM" => format!("{:02}", self.month.number()),
            "M" => self.month.number().to_string(),
            "dd" => format!("{:02}", self.day),
            "d" => self.day.to_string(),
            _ => String::new(),
        }
    }
}

/// Splits strict `yyyy-MM-dd` text into year, month and day.
pub(crate) fn parse_fields(text: &str) -> Result<(i32, HijriMonth, u8), ParseError> {
    let invalid = || ParseError::InvalidFormat(text.to_owned());

    let parts: Vec<&str> = text.split(DATE_SEPARATOR).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(invalid());
    };

    let year = digits(year, MAX_YEAR_DIGITS).ok_or_else(invalid)?;
    let month = digits(month, MAX_MONTH_DIGITS).ok_or_else(invalid)?;
    let day = digits(day, MAX_DAY_DIGITS).ok_or_else(invalid)?;

    let year = i32::from(year);
    let month_number = u8::try_from(month).map_err(|_| invalid())?;
    let day = u8::try_from(day).map_err(|_| invalid())?;

    let month = month_number
        .checked_sub(1)
        .and_then(|index| HijriMonth::from_index(index).ok())
        .ok_or(ParseError::InvalidMonth(month_number))?;

    Ok((year, month, day))
}

/// Parses 1 to `max_len` ASCII digits
fn digits(s: &str, max_len: usize) -> Option<u16> {
    if s.is_empty() || s.len() > max_len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl PartialEq for HijriDate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HijriDate {}

impl Hash for HijriDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.year, self.month, self.day).hash(state);
    }
}

impl PartialOrd for HijriDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HijriDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl FromStr for HijriDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for HijriDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for HijriDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
