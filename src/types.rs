use crate::RangeError;
use crate::consts::{
    DAY_NAMES_AR, DAY_NAMES_EN, MAX_MONTH_INDEX, MONTH_LENGTHS, MONTH_NAMES_AR, MONTH_NAMES_EN,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Hijri month. The discriminant is the 0-based month index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum HijriMonth {
    Muharram = 0,
    Safar = 1,
    RabiAlAwwal = 2,
    RabiAlThani = 3,
    JumadaAlAwwal = 4,
    JumadaAlThani = 5,
    Rajab = 6,
    Shaban = 7,
    Ramadan = 8,
    Shawwal = 9,
    DhuAlQidah = 10,
    DhuAlHijjah = 11,
}

impl HijriMonth {
    /// All months in calendar order
    pub const ALL: [Self; 12] = [
        Self::Muharram,
        Self::Safar,
        Self::RabiAlAwwal,
        Self::RabiAlThani,
        Self::JumadaAlAwwal,
        Self::JumadaAlThani,
        Self::Rajab,
        Self::Shaban,
        Self::Ramadan,
        Self::Shawwal,
        Self::DhuAlQidah,
        Self::DhuAlHijjah,
    ];

    /// Creates a month from its 0-based index
    ///
    /// # Errors
    /// Returns `RangeError::InvalidMonth` if the index is greater than 11.
    pub const fn from_index(index: u8) -> Result<Self, RangeError> {
        if index > MAX_MONTH_INDEX {
            return Err(RangeError::InvalidMonth(index));
        }
        Ok(Self::ALL[index as usize])
    }

    /// 0-based month index (Muharram = 0)
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based month number (Muharram = 1)
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Length of the month before the leap-year rule and any adjustment
    pub const fn base_length(self) -> u8 {
        MONTH_LENGTHS[self as usize]
    }

    /// Arabic name of the month
    pub const fn name_ar(self) -> &'static str {
        MONTH_NAMES_AR[self as usize]
    }

    /// English name of the month
    pub const fn name_en(self) -> &'static str {
        MONTH_NAMES_EN[self as usize]
    }
}

impl TryFrom<u8> for HijriMonth {
    type Error = RangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value)
    }
}

impl From<HijriMonth> for u8 {
    fn from(month: HijriMonth) -> Self {
        month.index()
    }
}

impl fmt::Display for HijriMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name_en())
    }
}

/// Day of the week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
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

    /// Weekday for a day number counted from Sunday; any integer is reduced modulo 7
    pub const fn from_sunday_offset(offset: i64) -> Self {
        Self::ALL[offset.rem_euclid(7) as usize]
    }

    /// Days since Sunday (Sunday = 0, Saturday = 6)
    #[inline]
    pub const fn num_days_from_sunday(self) -> u8 {
        self as u8
    }

    /// Arabic name of the weekday
    pub const fn name_ar(self) -> &'static str {
        DAY_NAMES_AR[self as usize]
    }

    /// English name of the weekday
    pub const fn name_en(self) -> &'static str {
        DAY_NAMES_EN[self as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name_en())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_from_index_valid() {
        for index in 0..=11 {
            let month = HijriMonth::from_index(index).unwrap();
            assert_eq!(month.index(), index);
            assert_eq!(month.number(), index + 1);
        }
    }

    #[test]
    fn test_month_from_index_invalid() {
        assert!(matches!(
            HijriMonth::from_index(12),
            Err(RangeError::InvalidMonth(12))
        ));
        assert!(matches!(
            HijriMonth::try_from(255),
            Err(RangeError::InvalidMonth(255))
        ));
    }

    #[test]
    fn test_month_base_length_alternates() {
        for month in HijriMonth::ALL {
            let expected = if month.index() % 2 == 0 { 30 } else { 29 };
            assert_eq!(month.base_length(), expected, "{month}");
        }
    }

    #[test]
    fn test_month_names() {
        assert_eq!(HijriMonth::Ramadan.name_en(), "Ramadan");
        assert_eq!(HijriMonth::Ramadan.name_ar(), "رمضان");
        assert_eq!(HijriMonth::DhuAlHijjah.name_en(), "Dhu al-Hijjah");
        assert_eq!(HijriMonth::Muharram.to_string(), "Muharram");
    }

    #[test]
    fn test_month_serde() {
        let json = serde_json::to_string(&HijriMonth::Ramadan).unwrap();
        assert_eq!(json, "8");

        let parsed: HijriMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, HijriMonth::Ramadan);

        let result: Result<HijriMonth, _> = serde_json::from_str("12");
        assert!(result.is_err());
    }

    #[test]
    fn test_month_ordering() {
        assert!(HijriMonth::Shaban < HijriMonth::Ramadan);
        assert!(HijriMonth::DhuAlHijjah > HijriMonth::Muharram);
    }

    #[test]
    fn test_weekday_from_sunday_offset() {
        assert_eq!(Weekday::from_sunday_offset(0), Weekday::Sunday);
        assert_eq!(Weekday::from_sunday_offset(4), Weekday::Thursday);
        assert_eq!(Weekday::from_sunday_offset(7), Weekday::Sunday);
        assert_eq!(Weekday::from_sunday_offset(-1), Weekday::Saturday);
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(Weekday::Friday.name_en(), "Friday");
        assert_eq!(Weekday::Friday.name_ar(), "الجمعة");
        assert_eq!(Weekday::Saturday.num_days_from_sunday(), 6);
        assert_eq!(Weekday::Monday.to_string(), "Monday");
    }
}
