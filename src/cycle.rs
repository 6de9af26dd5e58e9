//! Tabular Hijri calendar arithmetic on a 30-year cycle.
//!
//! A cycle has 19 common years of 354 days and 11 leap years of 355 days,
//! 10631 days in total. A year's place in the cycle is `(year + 2) mod 30`
//! (0 read as 30), and the leap years sit at [`LEAP_POSITIONS`]. The extra
//! day of a leap year goes to Dhu al-Hijjah.

use crate::consts::{
    CYCLE_DAYS, CYCLE_POSITION_OFFSET, CYCLE_YEARS, HIJRI_EPOCH, LEAP_DHU_AL_HIJJAH_DAYS,
    LEAP_POSITIONS, YEAR_LENGTHS,
};
use crate::{Adjustments, HijriMonth, JulianDay, RangeError};

/// 1-based position of `year` within its 30-year cycle.
///
/// Uses a non-negative remainder, so years before 1 AH continue the cycle
/// backwards without a gap.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn year_in_cycle(year: i32) -> u8 {
    let position = (year.rem_euclid(CYCLE_YEARS) + CYCLE_POSITION_OFFSET) % CYCLE_YEARS;
    if position == 0 {
        CYCLE_YEARS as u8
    } else {
        position as u8
    }
}

pub fn is_leap_year(year: i32) -> bool {
    LEAP_POSITIONS.contains(&year_in_cycle(year))
}

/// Days in `year`: 354, or 355 in a leap year
pub const fn year_length(year: i32) -> u16 {
    YEAR_LENGTHS[year_in_cycle(year) as usize - 1]
}

/// Length of `month` from the cycle alone, ignoring adjustments
pub fn base_days_in_month(year: i32, month: HijriMonth) -> u8 {
    if month == HijriMonth::DhuAlHijjah && is_leap_year(year) {
        LEAP_DHU_AL_HIJJAH_DAYS
    } else {
        month.base_length()
    }
}

/// Length of `month` with the applicable adjustment added.
///
/// Dhu al-Hijjah of a leap year is always 30 days and never adjusted.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn days_in_month(year: i32, month: HijriMonth, adjustments: &Adjustments) -> u8 {
    if month == HijriMonth::DhuAlHijjah && is_leap_year(year) {
        return LEAP_DHU_AL_HIJJAH_DAYS;
    }
    // registered adjustments keep every month within 1..=255 days
    (i32::from(month.base_length()) + adjustments.days_for(year, month)).clamp(1, 255) as u8
}

/// Days in all years from 1 AH up to, not including, `year` (negative before 1 AH)
#[allow(clippy::cast_possible_truncation)]
fn days_before_year(year: i32) -> i64 {
    let prior = i64::from(year) - 1;
    let cycles = prior.div_euclid(i64::from(CYCLE_YEARS));
    let remaining = prior.rem_euclid(i64::from(CYCLE_YEARS));

    // year lengths repeat every cycle, so the partial cycle reads from its start
    let partial: i64 = (1..=remaining)
        .map(|year_of_cycle| i64::from(year_length(year_of_cycle as i32)))
        .sum();

    cycles * CYCLE_DAYS + partial
}

/// Julian Day at the start of `day` of `month` in `year`.
///
/// Months before `month` count with their adjusted lengths, and the
/// adjustment for `month` itself is added to `day`.
#[allow(clippy::cast_possible_truncation)]
pub fn hijri_to_julian_day(
    year: i32,
    month: HijriMonth,
    day: u8,
    adjustments: &Adjustments,
) -> JulianDay {
    let months: i64 = HijriMonth::ALL[..usize::from(month.index())]
        .iter()
        .map(|&earlier| i64::from(days_in_month(year, earlier, adjustments)))
        .sum();
    let adjusted_day = i64::from(day) + i64::from(adjustments.days_for(year, month));

    let total = days_before_year(year) + months + adjusted_day;
    tracing::trace!(year, month = month.index(), day, total, "hijri date to julian day");

    JulianDay::new(HIJRI_EPOCH).add_days(total - 1)
}

/// Hijri `(year, month, day)` containing a Julian Day, from the cycle alone.
///
/// # Errors
/// Returns `RangeError::YearOverflow` for a non-finite Julian Day or one whose
/// year does not fit `i32`.
#[allow(clippy::cast_possible_truncation)]
pub fn julian_day_to_hijri(jd: JulianDay) -> Result<(i32, HijriMonth, u8), RangeError> {
    if !jd.is_supported() {
        return Err(RangeError::YearOverflow);
    }
    let days = (jd.get().floor() + 0.5 - HIJRI_EPOCH).floor() as i64;
    let cycles = days.div_euclid(CYCLE_DAYS);
    let mut remaining = days - cycles * CYCLE_DAYS;

    let mut year_of_cycle = 1;
    while year_of_cycle < CYCLE_YEARS {
        let length = i64::from(year_length(year_of_cycle));
        if remaining < length {
            break;
        }
        remaining -= length;
        year_of_cycle += 1;
    }
    let year = i32::try_from(cycles * i64::from(CYCLE_YEARS) + i64::from(year_of_cycle))
        .map_err(|_| RangeError::YearOverflow)?;

    let mut month = HijriMonth::Muharram;
    for candidate in HijriMonth::ALL {
        month = candidate;
        let length = i64::from(base_days_in_month(year, candidate));
        if remaining < length {
            break;
        }
        remaining -= length;
    }

    let day = (remaining + 1) as u8;
    tracing::trace!(jd = jd.get(), days, cycles, year, month = month.index(), day, "julian day to hijri date");
    Ok((year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AdjustmentRule;
    use crate::consts::{MAX_ADJUSTMENT_DAYS, MIN_ADJUSTMENT_DAYS};

    const NONE: &Adjustments = &Adjustments::new();

    #[test]
    fn test_is_leap_year_known_years() {
        for year in [1429, 1432, 1434, 1437, 1440, 1443, 1445, 1448] {
            assert!(is_leap_year(year), "{year} should be leap");
        }
        for year in [1430, 1431, 1433, 1444, 1446, 1447] {
            assert!(!is_leap_year(year), "{year} should be common");
        }
    }

    #[test]
    fn test_year_in_cycle_non_negative_for_early_years() {
        assert_eq!(year_in_cycle(28), 30);
        assert_eq!(year_in_cycle(0), 2);
        assert_eq!(year_in_cycle(-1), 1);
        assert_eq!(year_in_cycle(-2), 30);
        assert_eq!(year_in_cycle(-32), 30);
        assert_eq!(year_in_cycle(i32::MIN), year_in_cycle(i32::MIN + 30));

        assert!(is_leap_year(0));
        assert!(!is_leap_year(-1));
        assert!(is_leap_year(-30));
    }

    #[test]
    fn test_leap_year_period_is_thirty() {
        for year in -300..3000 {
            assert_eq!(is_leap_year(year), is_leap_year(year + 30), "{year}");
        }
    }

    #[test]
    fn test_eleven_leap_years_in_any_thirty() {
        for start in -300..3000 {
            let leaps = (start..start + 30).filter(|&y| is_leap_year(y)).count();
            assert_eq!(leaps, 11, "window starting at {start}");
        }
    }

    #[test]
    fn test_year_length_table_matches_leap_rule() {
        let total: u32 = YEAR_LENGTHS.iter().map(|&l| u32::from(l)).sum();
        assert_eq!(i64::from(total), CYCLE_DAYS);

        for year in -60..60 {
            let expected = if is_leap_year(year) { 355 } else { 354 };
            assert_eq!(year_length(year), expected, "{year}");

            let months: u16 = HijriMonth::ALL
                .iter()
                .map(|&m| u16::from(days_in_month(year, m, NONE)))
                .sum();
            assert_eq!(months, expected, "{year}");
        }
    }

    #[test]
    fn test_days_in_month_unadjusted() {
        for year in 1400..1500 {
            for month in HijriMonth::ALL {
                let days = days_in_month(year, month, NONE);
                if month == HijriMonth::DhuAlHijjah && is_leap_year(year) {
                    assert_eq!(days, 30);
                } else {
                    assert!(days == 29 || days == 30, "{year}/{month}: {days}");
                }
            }
        }
        assert_eq!(days_in_month(1444, HijriMonth::Ramadan, NONE), 30);
        assert_eq!(days_in_month(1444, HijriMonth::Shawwal, NONE), 29);
        assert_eq!(days_in_month(1444, HijriMonth::DhuAlHijjah, NONE), 29);
        assert_eq!(days_in_month(1443, HijriMonth::DhuAlHijjah, NONE), 30);
    }

    #[test]
    fn test_days_in_month_adjusted() {
        let mut adjustments = Adjustments::new();
        adjustments
            .register([
                AdjustmentRule::new(1).for_month(HijriMonth::Ramadan),
                AdjustmentRule::new(-1).for_month(HijriMonth::DhuAlHijjah),
            ])
            .unwrap();

        assert_eq!(days_in_month(1444, HijriMonth::Ramadan, &adjustments), 31);
        assert_eq!(days_in_month(1444, HijriMonth::Shawwal, &adjustments), 29);
        // common year: adjusted
        assert_eq!(days_in_month(1444, HijriMonth::DhuAlHijjah, &adjustments), 28);
        // leap year: fixed at 30
        assert_eq!(days_in_month(1443, HijriMonth::DhuAlHijjah, &adjustments), 30);
    }

    #[test]
    fn test_known_julian_days() {
        struct TestCase {
            hijri: (i32, HijriMonth, u8),
            jd: f64,
        }

        let cases = [
            TestCase { hijri: (1, HijriMonth::Muharram, 1), jd: 1_948_439.5 },
            TestCase { hijri: (0, HijriMonth::DhuAlHijjah, 30), jd: 1_948_438.5 },
            TestCase { hijri: (1444, HijriMonth::Ramadan, 1), jd: 2_460_026.5 },
            TestCase { hijri: (1444, HijriMonth::Ramadan, 15), jd: 2_460_040.5 },
            TestCase { hijri: (1444, HijriMonth::Shawwal, 1), jd: 2_460_056.5 },
            TestCase { hijri: (1445, HijriMonth::Muharram, 1), jd: 2_460_144.5 },
        ];

        for case in &cases {
            let (y, m, d) = case.hijri;
            assert_eq!(hijri_to_julian_day(y, m, d, NONE).get(), case.jd, "{y}/{m}/{d}");
            assert_eq!(julian_day_to_hijri(JulianDay::new(case.jd)), Ok(case.hijri));
        }
    }

    #[test]
    fn test_round_trip_every_day() {
        for year in -200..1700 {
            for month in HijriMonth::ALL {
                let length = base_days_in_month(year, month);
                for day in 1..=length {
                    let jd = hijri_to_julian_day(year, month, day, NONE);
                    assert_eq!(
                        julian_day_to_hijri(jd),
                        Ok((year, month, day)),
                        "{year}/{month}/{day} via {jd}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_consecutive_days_are_one_apart() {
        let mut previous = hijri_to_julian_day(1399, HijriMonth::DhuAlHijjah, 30, NONE);
        for year in 1400..1460 {
            for month in HijriMonth::ALL {
                for day in 1..=base_days_in_month(year, month) {
                    let jd = hijri_to_julian_day(year, month, day, NONE);
                    assert_eq!(jd.days_since(previous), 1, "{year}/{month}/{day}");
                    previous = jd;
                }
            }
        }
    }

    #[test]
    fn test_adjustment_shifts_own_month_and_later_months() {
        let mut adjustments = Adjustments::new();
        adjustments
            .register([AdjustmentRule::new(1).for_year(1444).for_month(HijriMonth::Ramadan)])
            .unwrap();

        let plain = hijri_to_julian_day(1444, HijriMonth::Ramadan, 15, NONE);
        let adjusted = hijri_to_julian_day(1444, HijriMonth::Ramadan, 15, &adjustments);
        assert_eq!(adjusted.days_since(plain), 1);

        let plain = hijri_to_julian_day(1444, HijriMonth::Shawwal, 1, NONE);
        let adjusted = hijri_to_julian_day(1444, HijriMonth::Shawwal, 1, &adjustments);
        assert_eq!(adjusted.days_since(plain), 1);

        let plain = hijri_to_julian_day(1444, HijriMonth::Shaban, 1, NONE);
        let adjusted = hijri_to_julian_day(1444, HijriMonth::Shaban, 1, &adjustments);
        assert_eq!(adjusted, plain);
    }

    #[test]
    fn test_days_in_month_at_adjustment_limits() {
        let mut adjustments = Adjustments::new();
        adjustments
            .register([
                AdjustmentRule::new(MAX_ADJUSTMENT_DAYS).for_month(HijriMonth::Muharram),
                AdjustmentRule::new(MIN_ADJUSTMENT_DAYS).for_month(HijriMonth::Safar),
                AdjustmentRule::new(MIN_ADJUSTMENT_DAYS).for_month(HijriMonth::Rajab),
            ])
            .unwrap();

        assert_eq!(days_in_month(1444, HijriMonth::Muharram, &adjustments), u8::MAX);
        assert_eq!(days_in_month(1444, HijriMonth::Safar, &adjustments), 1);
        assert_eq!(days_in_month(1444, HijriMonth::Rajab, &adjustments), 2);
    }

    #[test]
    fn test_julian_day_to_hijri_out_of_range() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1.0e15, -1.0e15] {
            assert_eq!(
                julian_day_to_hijri(JulianDay::new(value)),
                Err(RangeError::YearOverflow),
                "{value}"
            );
        }
        // within the day limit, but about 2.8 billion years out
        assert_eq!(
            julian_day_to_hijri(JulianDay::new(1.0e12)),
            Err(RangeError::YearOverflow)
        );
    }

    #[test]
    fn test_extreme_years_round_trip() {
        for year in [i32::MAX - 1, i32::MIN + 1, 1_000_000, -1_000_000] {
            let jd = hijri_to_julian_day(year, HijriMonth::Ramadan, 15, NONE);
            assert_eq!(
                julian_day_to_hijri(jd),
                Ok((year, HijriMonth::Ramadan, 15)),
                "{year}"
            );
        }
    }
}
