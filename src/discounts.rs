//! Discounts
//!
//! Discount categories and the per-category pricing strategies that turn an
//! order's gross value into its net value.

use std::{fmt, str::FromStr};

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use thiserror::Error;

pub mod factory;
pub mod rates;
pub mod strategy;

pub use factory::DiscountFactory;
pub use rates::DiscountRates;
pub use strategy::DiscountStrategy;

/// Errors specific to discount selection and configuration.
#[derive(Debug, Error, PartialEq)]
pub enum DiscountError {
    /// A textual category did not name any known discount category.
    #[error("invalid discount category: {0:?}")]
    InvalidCategory(String),

    /// A configured percentage was outside the `0..=1` range.
    #[error("percentage for {category} must be between 0 and 1, got {value}")]
    PercentageOutOfRange {
        /// Category the rate was configured for
        category: DiscountCategory,
        /// Offending fraction
        value: Decimal,
    },

    /// The category's rate cannot be configured.
    #[error("the rate for {0} is fixed and cannot be configured")]
    FixedRate(DiscountCategory),
}

/// The closed set of pricing-rule selectors that can be attached to an order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DiscountCategory {
    /// Explicitly no discount; priced the same as an order without a category.
    NoDiscount,

    /// Coupon discount
    Coupon,

    /// VIP customer discount
    Vip,

    /// Seasonal sale discount
    Seasonal,

    /// Customer birthday discount
    Birthday,
}

impl DiscountCategory {
    /// Every category, in declaration order.
    pub const ALL: [DiscountCategory; 5] = [
        DiscountCategory::NoDiscount,
        DiscountCategory::Coupon,
        DiscountCategory::Vip,
        DiscountCategory::Seasonal,
        DiscountCategory::Birthday,
    ];

    /// Human readable label.
    pub const fn label(self) -> &'static str {
        match self {
            DiscountCategory::NoDiscount => "None",
            DiscountCategory::Coupon => "Coupon",
            DiscountCategory::Vip => "VIP",
            DiscountCategory::Seasonal => "Seasonal",
            DiscountCategory::Birthday => "Birthday",
        }
    }
}

impl fmt::Display for DiscountCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DiscountCategory {
    type Err = DiscountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        DiscountCategory::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DiscountError::InvalidCategory(s.to_string()))
    }
}

/// Subtract `percent` of `gross` from `gross`.
///
/// No rounding is applied; the result keeps whatever scale the decimal
/// multiplication produces.
pub fn percent_off(percent: Percentage, gross: Decimal) -> Decimal {
    // decimal_percentage doesn't expose the underlying Decimal, multiplying is the only way in
    gross - percent * gross
}

/// Returns the fraction held by a [`Percentage`] (e.g. `0.05` for 5%).
pub fn fraction(percent: Percentage) -> Decimal {
    percent * Decimal::ONE
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn from_str_is_case_insensitive() -> TestResult {
        assert_eq!("vip".parse::<DiscountCategory>()?, DiscountCategory::Vip);
        assert_eq!(
            " Seasonal ".parse::<DiscountCategory>()?,
            DiscountCategory::Seasonal
        );
        assert_eq!(
            "NONE".parse::<DiscountCategory>()?,
            DiscountCategory::NoDiscount
        );

        Ok(())
    }

    #[test]
    fn from_str_round_trips_every_label() -> TestResult {
        for category in DiscountCategory::ALL {
            assert_eq!(category.to_string().parse::<DiscountCategory>()?, category);
        }

        Ok(())
    }

    #[test]
    fn from_str_rejects_unknown_category() {
        let result = "loyalty".parse::<DiscountCategory>();

        assert_eq!(
            result,
            Err(DiscountError::InvalidCategory("loyalty".to_string()))
        );
    }

    #[test]
    fn invalid_category_message_names_the_value() {
        let error = DiscountError::InvalidCategory("loyalty".to_string());

        assert_eq!(error.to_string(), "invalid discount category: \"loyalty\"");
    }

    #[test]
    fn percent_off_subtracts_fraction_of_gross() {
        let net = percent_off(Percentage::from(Decimal::new(25, 2)), Decimal::new(200, 0));

        assert_eq!(net, Decimal::new(150, 0));
    }

    #[test]
    fn fraction_returns_underlying_value() {
        assert_eq!(
            fraction(Percentage::from(Decimal::new(5, 2))),
            Decimal::new(5, 2)
        );
    }
}
