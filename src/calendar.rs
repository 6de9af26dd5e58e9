//! Conversion context holding the month adjustments in force.

use std::sync::Arc;

use crate::{
    AdjustmentRule, Adjustments, GregorianDate, HijriDate, HijriMonth, JulianDay, ParseError,
    RangeError, cycle,
};

/// A tabular Hijri calendar with an optional set of month adjustments.
///
/// Dates built through a calendar keep a snapshot of its adjustments, so
/// registering new rules later never changes the Gregorian mapping of an
/// existing [`HijriDate`]. Cloning is cheap.
///
/// ```
/// use hijri_date::{AdjustmentRule, HijriCalendar, HijriMonth};
///
/// let calendar = HijriCalendar::with_adjustments([
///     AdjustmentRule::new(1).for_month(HijriMonth::Ramadan),
/// ])?;
/// assert_eq!(calendar.days_in_month(1444, HijriMonth::Ramadan), 31);
/// # Ok::<(), hijri_date::RangeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct HijriCalendar {
    adjustments: Arc<Adjustments>,
}

impl HijriCalendar {
    /// A calendar without adjustments
    pub fn new() -> Self {
        Self::default()
    }

    /// A calendar applying `rules`.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidAdjustment` as [`Adjustments::register`] does.
    pub fn with_adjustments<I>(rules: I) -> Result<Self, RangeError>
    where
        I: IntoIterator<Item = AdjustmentRule>,
    {
        let mut adjustments = Adjustments::new();
        adjustments.register(rules)?;
        Ok(Self::from(adjustments))
    }

    /// Replaces all adjustments. Dates already built keep the old ones.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidAdjustment` and keeps the current rules if
    /// any offset is out of range.
    pub fn register_adjustments<I>(&mut self, rules: I) -> Result<(), RangeError>
    where
        I: IntoIterator<Item = AdjustmentRule>,
    {
        *self = Self::with_adjustments(rules)?;
        Ok(())
    }

    pub fn adjustments(&self) -> &Adjustments {
        &self.adjustments
    }

    /// Whether both calendars share the same adjustment snapshot
    pub fn same_snapshot(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.adjustments, &other.adjustments)
    }

    /// Adjusted length of `month` in `year`
    pub fn days_in_month(&self, year: i32, month: HijriMonth) -> u8 {
        cycle::days_in_month(year, month, &self.adjustments)
    }

    /// Adjusted Julian Day of a Hijri date; the fields are not validated
    pub fn to_julian_day(&self, year: i32, month: HijriMonth, day: u8) -> JulianDay {
        cycle::hijri_to_julian_day(year, month, day, &self.adjustments)
    }

    /// Builds a date, checking `day` against the adjusted month length.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidDay` if `day` is 0 or past the end of the month.
    pub fn date(&self, year: i32, month: HijriMonth, day: u8) -> Result<HijriDate, RangeError> {
        let max = self.days_in_month(year, month);
        if day == 0 || day > max {
            return Err(RangeError::InvalidDay {
                year,
                month: month.index(),
                day,
                max,
            });
        }
        Ok(HijriDate::from_parts(year, month, day, self.clone()))
    }

    /// Builds a date from a 0-based month index.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidMonth` if the index is above 11, or
    /// `RangeError::InvalidDay` as [`Self::date`] does.
    pub fn from_ymd(&self, year: i32, month_index: u8, day: u8) -> Result<HijriDate, RangeError> {
        let month = HijriMonth::from_index(month_index)?;
        self.date(year, month, day)
    }

    /// Hijri date containing a Julian Day.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidDay` when an adjustment shortens the month
    /// the cycle places the day in, and `RangeError::YearOverflow` when the
    /// Julian Day is not finite or its year does not fit `i32`.
    pub fn from_julian_day(&self, jd: JulianDay) -> Result<HijriDate, RangeError> {
        let (year, month, day) = cycle::julian_day_to_hijri(jd)?;
        self.date(year, month, day)
    }

    /// Hijri date of a civil date.
    ///
    /// # Errors
    /// See [`Self::from_julian_day`].
    pub fn from_gregorian(&self, date: GregorianDate) -> Result<HijriDate, RangeError> {
        self.from_julian_day(date.julian_day())
    }

    /// Today's Hijri date, from the UTC civil date.
    ///
    /// # Errors
    /// See [`Self::from_julian_day`].
    pub fn today(&self) -> Result<HijriDate, RangeError> {
        self.from_gregorian(GregorianDate::today()?)
    }

    /// Parses `yyyy-M-d` with a 1-4 digit year and 1-2 digit 1-based month and day.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` when the text does not have that
    /// shape, `ParseError::InvalidMonth` when the month is outside 1-12, and
    /// `ParseError::Range` when the day does not exist.
    pub fn parse(&self, text: &str) -> Result<HijriDate, ParseError> {
        let (year, month, day) = crate::parse_fields(text)?;
        Ok(self.date(year, month, day)?)
    }
}

impl From<Adjustments> for HijriCalendar {
    fn from(adjustments: Adjustments) -> Self {
        Self {
            adjustments: Arc::new(adjustments),
        }
    }
}
