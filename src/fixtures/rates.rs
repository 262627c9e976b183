//! Rate Fixtures

use rust_decimal::Decimal;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    discounts::{DiscountCategory, DiscountRates},
    fixtures::FixtureError,
};

/// Apply `category name -> percentage` overrides from a fixture to `rates`.
///
/// Category names are matched case-insensitively, so each category may only
/// appear once.
///
/// # Errors
///
/// Returns an error if a category name is unknown or repeated, or a
/// percentage is malformed or outside `0..=1`.
pub fn apply_rates(
    rates: &mut DiscountRates,
    overrides: &FxHashMap<String, String>,
) -> Result<(), FixtureError> {
    let mut seen = FxHashSet::default();

    for (name, value) in overrides {
        let category = name.parse::<DiscountCategory>()?;

        if !seen.insert(category) {
            return Err(FixtureError::DuplicateRate(category));
        }

        rates.set_rate(category, parse_percentage(value)?)?;
    }

    Ok(())
}

/// Parse a percentage string into a fraction.
///
/// Accepts either percentage format (`"15%"`) or decimal format (`"0.15"`).
///
/// # Errors
///
/// Returns [`FixtureError::InvalidPercentage`] if the string is not a number.
pub fn parse_percentage(s: &str) -> Result<Decimal, FixtureError> {
    let trimmed = s.trim();

    if let Some(percent_str) = trimmed.strip_suffix('%') {
        let value = percent_str
            .trim()
            .parse::<Decimal>()
            .map_err(|_err| FixtureError::InvalidPercentage(s.to_string()))?;

        Ok(value / Decimal::ONE_HUNDRED)
    } else {
        trimmed
            .parse::<Decimal>()
            .map_err(|_err| FixtureError::InvalidPercentage(s.to_string()))
    }
}
