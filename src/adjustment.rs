//! Locally observed month-length overrides.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_ADJUSTMENT_DAYS, MIN_ADJUSTMENT_DAYS};
use crate::{HijriMonth, RangeError};

/// Shifts the length of matching months by `days`.
///
/// Absent `year` or `month` match any value. An absent `days` counts as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdjustmentRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<HijriMonth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl AdjustmentRule {
    /// A rule adding `days` to every month; narrow it with [`Self::for_year`]
    /// and [`Self::for_month`]
    pub const fn new(days: i32) -> Self {
        Self {
            days: Some(days),
            month: None,
            year: None,
        }
    }

    /// Restricts the rule to one year
    #[must_use]
    pub const fn for_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Restricts the rule to one month
    #[must_use]
    pub const fn for_month(mut self, month: HijriMonth) -> Self {
        self.month = Some(month);
        self
    }

    /// Offset in days, 0 when unset
    #[inline]
    pub fn days(&self) -> i32 {
        self.days.unwrap_or(0)
    }

    /// Whether the offset keeps every month between 1 and 255 days
    pub fn is_valid(&self) -> bool {
        (MIN_ADJUSTMENT_DAYS..=MAX_ADJUSTMENT_DAYS).contains(&self.days())
    }

    /// Whether the rule applies to `month` of `year`
    pub fn matches(&self, year: i32, month: HijriMonth) -> bool {
        self.year.is_none_or(|y| y == year) && self.month.is_none_or(|m| m == month)
    }
}

/// Ordered list of adjustment rules; the first matching rule wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<AdjustmentRule>", into = "Vec<AdjustmentRule>")]
pub struct Adjustments {
    rules: Vec<AdjustmentRule>,
}

impl Adjustments {
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Replaces every rule with `rules`.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidAdjustment` if any offset is outside
    /// [`MIN_ADJUSTMENT_DAYS`]..=[`MAX_ADJUSTMENT_DAYS`]; the current rules are
    /// then left unchanged.
    pub fn register<I>(&mut self, rules: I) -> Result<(), RangeError>
    where
        I: IntoIterator<Item = AdjustmentRule>,
    {
        let rules: Vec<AdjustmentRule> = rules.into_iter().collect();
        if let Some(rule) = rules.iter().find(|rule| !rule.is_valid()) {
            tracing::warn!(days = rule.days(), "rejected hijri month adjustment");
            return Err(RangeError::InvalidAdjustment(rule.days()));
        }
        self.rules = rules;
        tracing::debug!(count = self.rules.len(), "registered hijri month adjustments");
        Ok(())
    }

    /// First rule, in registration order, that applies to `month` of `year`
    pub fn lookup(&self, year: i32, month: HijriMonth) -> Option<&AdjustmentRule> {
        self.rules.iter().find(|rule| rule.matches(year, month))
    }

    /// Offset of the applicable rule, 0 if none applies
    pub fn days_for(&self, year: i32, month: HijriMonth) -> i32 {
        self.lookup(year, month).map_or(0, AdjustmentRule::days)
    }

    pub fn rules(&self) -> &[AdjustmentRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl TryFrom<Vec<AdjustmentRule>> for Adjustments {
    type Error = RangeError;

    fn try_from(rules: Vec<AdjustmentRule>) -> Result<Self, Self::Error> {
        let mut adjustments = Self::new();
        adjustments.register(rules)?;
        Ok(adjustments)
    }
}

impl From<Adjustments> for Vec<AdjustmentRule> {
    fn from(adjustments: Adjustments) -> Self {
        adjustments.rules
    }
}
