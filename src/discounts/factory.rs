//! Discount Factory
//!
//! Maps a discount category to the strategy that prices it.

use super::{DiscountCategory, DiscountError, DiscountRates, DiscountStrategy};

/// Selects a [`DiscountStrategy`] for a discount category.
#[derive(Debug, Default, Copy, Clone)]
pub struct DiscountFactory {
    rates: DiscountRates,
}

impl DiscountFactory {
    /// Create a factory using the given rates.
    pub fn new(rates: DiscountRates) -> Self {
        Self { rates }
    }

    /// Return the rates strategies are built with.
    pub fn rates(&self) -> &DiscountRates {
        &self.rates
    }

    /// Create the strategy for a category.
    ///
    /// An absent category prices the same as [`DiscountCategory::NoDiscount`].
    pub fn create(&self, category: Option<DiscountCategory>) -> DiscountStrategy {
        let Some(category) = category else {
            return DiscountStrategy::NoDiscount;
        };

        let rate = self.rates.rate(category);

        match category {
            DiscountCategory::NoDiscount => DiscountStrategy::NoDiscount,
            DiscountCategory::Coupon => DiscountStrategy::Coupon(rate),
            DiscountCategory::Vip => DiscountStrategy::Vip(rate),
            DiscountCategory::Seasonal => DiscountStrategy::Seasonal(rate),
            DiscountCategory::Birthday => DiscountStrategy::Birthday(rate),
        }
    }

    /// Create the strategy for a textual category name (e.g. `"seasonal"`).
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::InvalidCategory`] if `name` is not a known category.
    pub fn create_named(&self, name: &str) -> Result<DiscountStrategy, DiscountError> {
        Ok(self.create(Some(name.parse()?)))
    }
}
