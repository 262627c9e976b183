//! Order Discounts prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    calculator::DiscountCalculator,
    discounts::{
        DiscountCategory, DiscountError, DiscountFactory, DiscountRates, DiscountStrategy,
    },
    fixtures::{Fixture, FixtureError},
    orders::Order,
    summary::{SummaryError, write_priced_orders, write_summary},
};
