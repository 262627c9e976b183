//! Discount Strategy

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use super::{DiscountCategory, fraction, percent_off};

/// A pricing rule turning a gross value into a net value.
///
/// One variant per [`DiscountCategory`]. Every rule other than
/// [`DiscountStrategy::NoDiscount`] takes its percentage off the gross value.
#[derive(Debug, Copy, Clone)]
pub enum DiscountStrategy {
    /// Net value equals gross value.
    NoDiscount,

    /// Coupon percentage off
    Coupon(Percentage),

    /// VIP percentage off
    Vip(Percentage),

    /// Seasonal percentage off (e.g., "5% off")
    Seasonal(Percentage),

    /// Birthday percentage off
    Birthday(Percentage),
}

impl DiscountStrategy {
    /// Calculate the net value for a gross value.
    ///
    /// Negative gross values are not rejected; the same formula applies.
    pub fn apply(&self, gross: Decimal) -> Decimal {
        match self {
            DiscountStrategy::NoDiscount => gross,
            DiscountStrategy::Coupon(pct)
            | DiscountStrategy::Vip(pct)
            | DiscountStrategy::Seasonal(pct)
            | DiscountStrategy::Birthday(pct) => percent_off(*pct, gross),
        }
    }

    /// The category this strategy prices.
    pub fn category(&self) -> DiscountCategory {
        match self {
            DiscountStrategy::NoDiscount => DiscountCategory::NoDiscount,
            DiscountStrategy::Coupon(_) => DiscountCategory::Coupon,
            DiscountStrategy::Vip(_) => DiscountCategory::Vip,
            DiscountStrategy::Seasonal(_) => DiscountCategory::Seasonal,
            DiscountStrategy::Birthday(_) => DiscountCategory::Birthday,
        }
    }

    /// Fraction of the gross value taken off (e.g. `0.05` for 5%).
    pub fn percentage_off(&self) -> Decimal {
        match self {
            DiscountStrategy::NoDiscount => Decimal::ZERO,
            DiscountStrategy::Coupon(pct)
            | DiscountStrategy::Vip(pct)
            | DiscountStrategy::Seasonal(pct)
            | DiscountStrategy::Birthday(pct) => fraction(*pct),
        }
    }
}
