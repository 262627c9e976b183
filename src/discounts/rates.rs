//! Discount Rates
//!
//! The percentage taken off the gross value for each configurable category.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use super::{DiscountCategory, DiscountError, fraction};

/// Percentage-off configuration for every discount category.
///
/// [`DiscountCategory::NoDiscount`] is always 0% and cannot be configured.
#[derive(Debug, Copy, Clone)]
pub struct DiscountRates {
    coupon: Percentage,
    vip: Percentage,
    seasonal: Percentage,
    birthday: Percentage,
}

impl DiscountRates {
    /// Coupons don't take anything off until a rate is configured.
    pub const DEFAULT_COUPON: Decimal = Decimal::ZERO;

    /// VIP orders are priced at zero.
    pub const DEFAULT_VIP: Decimal = Decimal::ONE;

    /// Seasonal sale, 5% off.
    pub const DEFAULT_SEASONAL: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

    /// Birthday, 10% off.
    pub const DEFAULT_BIRTHDAY: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

    /// Returns the configured percentage for a category.
    pub fn rate(&self, category: DiscountCategory) -> Percentage {
        match category {
            DiscountCategory::NoDiscount => Percentage::from(Decimal::ZERO),
            DiscountCategory::Coupon => self.coupon,
            DiscountCategory::Vip => self.vip,
            DiscountCategory::Seasonal => self.seasonal,
            DiscountCategory::Birthday => self.birthday,
        }
    }

    /// Configure the fraction taken off for a category (e.g. `0.05` for 5%).
    ///
    /// # Errors
    ///
    /// - [`DiscountError::PercentageOutOfRange`]: `value` is below 0 or above 1.
    /// - [`DiscountError::FixedRate`]: `category` is [`DiscountCategory::NoDiscount`].
    pub fn set_rate(
        &mut self,
        category: DiscountCategory,
        value: Decimal,
    ) -> Result<&mut Self, DiscountError> {
        if !(Decimal::ZERO..=Decimal::ONE).contains(&value) {
            return Err(DiscountError::PercentageOutOfRange { category, value });
        }

        let slot = match category {
            DiscountCategory::NoDiscount => return Err(DiscountError::FixedRate(category)),
            DiscountCategory::Coupon => &mut self.coupon,
            DiscountCategory::Vip => &mut self.vip,
            DiscountCategory::Seasonal => &mut self.seasonal,
            DiscountCategory::Birthday => &mut self.birthday,
        };

        *slot = Percentage::from(value);

        Ok(self)
    }

    /// Consuming variant of [`DiscountRates::set_rate`].
    ///
    /// # Errors
    ///
    /// See [`DiscountRates::set_rate`].
    pub fn with_rate(
        mut self,
        category: DiscountCategory,
        value: Decimal,
    ) -> Result<Self, DiscountError> {
        self.set_rate(category, value)?;

        Ok(self)
    }

    /// Returns the configured fraction for a category.
    pub fn fraction(&self, category: DiscountCategory) -> Decimal {
        fraction(self.rate(category))
    }
}

impl Default for DiscountRates {
    fn default() -> Self {
        Self {
            coupon: Percentage::from(Self::DEFAULT_COUPON),
            vip: Percentage::from(Self::DEFAULT_VIP),
            seasonal: Percentage::from(Self::DEFAULT_SEASONAL),
            birthday: Percentage::from(Self::DEFAULT_BIRTHDAY),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults() {
        let rates = DiscountRates::default();

        assert_eq!(rates.fraction(DiscountCategory::NoDiscount), Decimal::ZERO);
        assert_eq!(rates.fraction(DiscountCategory::Coupon), Decimal::ZERO);
        assert_eq!(rates.fraction(DiscountCategory::Vip), Decimal::ONE);
        assert_eq!(
            rates.fraction(DiscountCategory::Seasonal),
            Decimal::new(5, 2)
        );
        assert_eq!(
            rates.fraction(DiscountCategory::Birthday),
            Decimal::new(10, 2)
        );
    }

    #[test]
    fn set_rate_updates_only_that_category() -> TestResult {
        let rates =
            DiscountRates::default().with_rate(DiscountCategory::Coupon, Decimal::new(15, 2))?;

        assert_eq!(
            rates.fraction(DiscountCategory::Coupon),
            Decimal::new(15, 2)
        );
        assert_eq!(rates.fraction(DiscountCategory::Vip), Decimal::ONE);

        Ok(())
    }

    #[test]
    fn bounds_are_inclusive() -> TestResult {
        let mut rates = DiscountRates::default();

        rates.set_rate(DiscountCategory::Birthday, Decimal::ZERO)?;
        rates.set_rate(DiscountCategory::Seasonal, Decimal::ONE)?;

        assert_eq!(rates.fraction(DiscountCategory::Birthday), Decimal::ZERO);
        assert_eq!(rates.fraction(DiscountCategory::Seasonal), Decimal::ONE);

        Ok(())
    }

    #[test]
    fn out_of_range_rate_is_rejected() {
        let mut rates = DiscountRates::default();

        let above = rates
            .set_rate(DiscountCategory::Vip, Decimal::new(101, 2))
            .map(|_| ());
        let below = rates
            .set_rate(DiscountCategory::Vip, Decimal::new(-1, 2))
            .map(|_| ());

        assert_eq!(
            above,
            Err(DiscountError::PercentageOutOfRange {
                category: DiscountCategory::Vip,
                value: Decimal::new(101, 2),
            })
        );
        assert!(matches!(
            below,
            Err(DiscountError::PercentageOutOfRange { .. })
        ));
        assert_eq!(rates.fraction(DiscountCategory::Vip), Decimal::ONE);
    }

    #[test]
    fn no_discount_rate_is_fixed() {
        let result =
            DiscountRates::default().with_rate(DiscountCategory::NoDiscount, Decimal::ZERO);

        assert!(matches!(
            result,
            Err(DiscountError::FixedRate(DiscountCategory::NoDiscount))
        ));
    }
}
