//! Order Fixtures

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{discounts::DiscountCategory, fixtures::FixtureError, orders::Order};

/// Wrapper for an order set in YAML
#[derive(Debug, Deserialize)]
pub struct OrdersFixture {
    /// Map of category name -> percentage taken off (e.g. `seasonal: "5%"` or `"0.05"`)
    #[serde(default)]
    pub rates: FxHashMap<String, String>,

    /// Orders to price
    pub orders: Vec<OrderFixture>,
}

/// Order Fixture
#[derive(Debug, Deserialize)]
pub struct OrderFixture {
    /// Order identifier
    pub id: String,

    /// Gross value as a decimal string (e.g., "1000.00")
    pub gross_value: String,

    /// Discount category name; absent means no discount
    #[serde(default)]
    pub discount_category: Option<String>,

    /// Number of items
    #[serde(default)]
    pub item_count: u32,

    /// Whether the order has been paid
    #[serde(default)]
    pub is_paid: bool,

    /// Customer email address
    #[serde(default)]
    pub customer_email: String,
}

impl TryFrom<OrderFixture> for Order {
    type Error = FixtureError;

    fn try_from(fixture: OrderFixture) -> Result<Self, Self::Error> {
        let gross_value = fixture.gross_value.trim().parse::<Decimal>().map_err(|_err| {
            FixtureError::InvalidAmount {
                order: fixture.id.clone(),
                value: fixture.gross_value.clone(),
            }
        })?;

        let mut order = Order::new(fixture.id, gross_value)
            .with_item_count(fixture.item_count)
            .with_paid(fixture.is_paid)
            .with_customer_email(fixture.customer_email);

        if let Some(name) = fixture.discount_category {
            order = order.with_category(name.parse::<DiscountCategory>()?);
        }

        Ok(order)
    }
}
