//! Discount Calculator

use tracing::debug;

use crate::{
    discounts::{DiscountFactory, DiscountRates},
    orders::Order,
};

/// Prices orders using the strategy for their discount category.
#[derive(Debug, Default, Copy, Clone)]
pub struct DiscountCalculator {
    factory: DiscountFactory,
}

impl DiscountCalculator {
    /// Create a calculator that selects strategies with `factory`.
    pub fn new(factory: DiscountFactory) -> Self {
        Self { factory }
    }

    /// Create a calculator using the given rates.
    pub fn with_rates(rates: DiscountRates) -> Self {
        Self::new(DiscountFactory::new(rates))
    }

    /// Return the strategy factory.
    pub fn factory(&self) -> &DiscountFactory {
        &self.factory
    }

    /// Calculate the order's net value and store it on the order.
    ///
    /// The net value depends only on the gross value and discount category, so
    /// calling this again on the same order yields the same result.
    pub fn calculate<'o>(&self, order: &'o mut Order) -> &'o mut Order {
        let strategy = self.factory.create(order.discount_category());
        let net_value = strategy.apply(order.gross_value());

        debug!(
            order_id = order.id(),
            category = %strategy.category(),
            gross_value = %order.gross_value(),
            net_value = %net_value,
            "calculated order discount"
        );

        order.set_net_value(net_value);

        order
    }
}
