//! Fixtures
//!
//! Order sets loaded from YAML, optionally carrying their own discount rates.

use std::{fs, path::Path};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    discounts::{DiscountCategory, DiscountError, DiscountRates},
    fixtures::{orders::OrdersFixture, rates::apply_rates},
    orders::Order,
};

pub mod orders;
pub mod rates;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid amount format
    #[error("Invalid amount for order {order}: {value}")]
    InvalidAmount {
        /// Order identifier
        order: String,
        /// Unparsed amount
        value: String,
    },

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// The same category appears more than once in `rates:`
    #[error("Duplicate rate for discount category {0}")]
    DuplicateRate(DiscountCategory),

    /// Unknown discount category or out of range rate
    #[error(transparent)]
    Discount(#[from] DiscountError),
}

/// A set of orders and the rates to price them with.
#[derive(Debug, Clone, Default)]
pub struct Fixture {
    rates: DiscountRates,
    orders: Vec<Order>,
}

impl Fixture {
    /// Create a fixture from already-built orders, using the default rates.
    pub fn new(orders: impl Into<Vec<Order>>) -> Self {
        Self {
            rates: DiscountRates::default(),
            orders: orders.into(),
        }
    }

    /// The two sample orders: a paid birthday order and an unpaid order without
    /// a discount, both for 1000.
    pub fn demo() -> Self {
        Self::new([
            Order::new("001", Decimal::new(1000, 0))
                .with_category(DiscountCategory::Birthday)
                .with_item_count(1)
                .with_paid(true)
                .with_customer_email("customer@example.com"),
            Order::new("002", Decimal::new(1000, 0))
                .with_item_count(1)
                .with_paid(false)
                .with_customer_email("customer@example.com"),
        ])
    }

    /// Parse a fixture from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed, an amount or rate is
    /// malformed, or a discount category is unknown.
    pub fn from_yaml(contents: &str) -> Result<Self, FixtureError> {
        let fixture: OrdersFixture = serde_norway::from_str(contents)?;

        let mut rates = DiscountRates::default();
        apply_rates(&mut rates, &fixture.rates)?;

        let orders = fixture
            .orders
            .into_iter()
            .map(Order::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rates, orders })
    }

    /// Load a fixture from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or [`Fixture::from_yaml`] fails.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path.as_ref())?;

        Self::from_yaml(&contents)
    }

    /// Get all orders
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Get all orders, mutably
    pub fn orders_mut(&mut self) -> &mut [Order] {
        &mut self.orders
    }

    /// Get the rates
    pub fn rates(&self) -> &DiscountRates {
        &self.rates
    }

    /// Get the rates, mutably
    pub fn rates_mut(&mut self) -> &mut DiscountRates {
        &mut self.rates
    }
}
