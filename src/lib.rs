//! Order Discounts
//!
//! Prices an order by selecting a discount strategy for its category and
//! applying it to the order's gross value.

pub mod calculator;
pub mod discounts;
pub mod fixtures;
pub mod orders;
pub mod prelude;
pub mod summary;
