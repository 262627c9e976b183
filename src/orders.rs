//! Orders

use std::fmt;

use rust_decimal::Decimal;

use crate::discounts::DiscountCategory;

/// An order being priced.
///
/// The net value is zero until the order has been through a
/// [`DiscountCalculator`](crate::calculator::DiscountCalculator).
#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    id: String,
    gross_value: Decimal,
    net_value: Decimal,
    discount_category: Option<DiscountCategory>,
    item_count: u32,
    is_paid: bool,
    customer_email: String,
    priced: bool,
}

impl Order {
    /// Creates a new unpaid order with no discount category.
    pub fn new(id: impl Into<String>, gross_value: Decimal) -> Self {
        Self {
            id: id.into(),
            gross_value,
            net_value: Decimal::ZERO,
            discount_category: None,
            item_count: 0,
            is_paid: false,
            customer_email: String::new(),
            priced: false,
        }
    }

    /// Set the discount category.
    #[must_use]
    pub fn with_category(mut self, category: DiscountCategory) -> Self {
        self.discount_category = Some(category);
        self
    }

    /// Set the number of items in the order.
    #[must_use]
    pub fn with_item_count(mut self, item_count: u32) -> Self {
        self.item_count = item_count;
        self
    }

    /// Set whether the order has been paid.
    #[must_use]
    pub fn with_paid(mut self, is_paid: bool) -> Self {
        self.is_paid = is_paid;
        self
    }

    /// Set the customer's email address.
    #[must_use]
    pub fn with_customer_email(mut self, customer_email: impl Into<String>) -> Self {
        self.customer_email = customer_email.into();
        self
    }

    /// Order identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Value before any discount
    pub fn gross_value(&self) -> Decimal {
        self.gross_value
    }

    /// Value after the discount; zero until calculated
    pub fn net_value(&self) -> Decimal {
        self.net_value
    }

    /// Discount category, if any
    pub fn discount_category(&self) -> Option<DiscountCategory> {
        self.discount_category
    }

    /// Number of items
    pub fn item_count(&self) -> u32 {
        self.item_count
    }

    /// Whether the order has been paid
    pub fn is_paid(&self) -> bool {
        self.is_paid
    }

    /// Customer email address
    pub fn customer_email(&self) -> &str {
        &self.customer_email
    }

    /// Whether a net value has been calculated for this order
    pub fn is_priced(&self) -> bool {
        self.priced
    }

    /// Amount taken off the gross value, or `None` if the order hasn't been priced yet.
    pub fn savings(&self) -> Option<Decimal> {
        self.priced.then(|| self.gross_value - self.net_value)
    }

    pub(crate) fn set_net_value(&mut self, net_value: Decimal) {
        self.net_value = net_value;
        self.priced = true;
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let category = self
            .discount_category
            .map_or("-", DiscountCategory::label);

        write!(
            f,
            "Order(id={}, gross_value={}, net_value={}, discount_category={category}, \
             item_count={}, is_paid={}, customer_email={})",
            self.id,
            self.gross_value,
            self.net_value,
            self.item_count,
            self.is_paid,
            self.customer_email,
        )
    }
}
