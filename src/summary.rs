//! Summary
//!
//! Tabular rendering of priced orders.

use std::io;

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{calculator::DiscountCalculator, discounts::DiscountCategory, orders::Order};

/// Errors that can occur when writing a summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Error writing to the output
    #[error("failed to write order summary")]
    IO(#[from] io::Error),
}

/// Prices each order, writing its textual representation before and after
/// the discount is calculated, followed by a blank line.
///
/// # Errors
///
/// Returns a [`SummaryError`] if writing to `out` fails.
pub fn write_priced_orders(
    mut out: impl io::Write,
    calculator: &DiscountCalculator,
    orders: &mut [Order],
) -> Result<(), SummaryError> {
    for order in orders {
        writeln!(out, "{order}")?;

        calculator.calculate(order);

        writeln!(out, "{order}")?;
        writeln!(out)?;
    }

    Ok(())
}

/// Writes a table of orders with their gross value, net value and savings.
///
/// # Errors
///
/// Returns a [`SummaryError`] if the table cannot be written to `out`.
pub fn write_summary(mut out: impl io::Write, orders: &[Order]) -> Result<(), SummaryError> {
    let mut builder = Builder::default();

    builder.push_record(["Order", "Category", "Gross", "Net", "Savings", "Paid"]);

    for order in orders {
        builder.push_record([
            order.id().to_string(),
            order
                .discount_category()
                .map_or("-", DiscountCategory::label)
                .to_string(),
            order.gross_value().to_string(),
            order.net_value().to_string(),
            order
                .savings()
                .map_or_else(|| "-".to_string(), |savings| savings.to_string()),
            if order.is_paid() { "yes" } else { "no" }.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..5), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::fixtures::Fixture;

    use super::*;

    #[test]
    fn renders_header_and_order_rows() -> TestResult {
        let calculator = DiscountCalculator::default();
        let mut orders = [
            Order::new("S1", Decimal::new(200, 0)).with_category(DiscountCategory::Seasonal),
            Order::new("S2", Decimal::new(75, 0)).with_paid(true),
        ];

        for order in &mut orders {
            calculator.calculate(order);
        }

        let mut out = Vec::new();
        write_summary(&mut out, &orders)?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("Savings"));
        assert!(output.contains("S1"));
        assert!(output.contains("Seasonal"));
        assert!(output.contains("190"));
        assert!(output.contains("S2"));
        assert!(output.contains("yes"));

        Ok(())
    }

    #[test]
    fn echoes_demo_orders_before_and_after_pricing() -> TestResult {
        let mut fixture = Fixture::demo();
        let calculator = DiscountCalculator::with_rates(*fixture.rates());

        let mut out = Vec::new();
        write_priced_orders(&mut out, &calculator, fixture.orders_mut())?;

        let output = String::from_utf8(out)?;
        let lines: Vec<&str> = output.lines().filter(|line| !line.is_empty()).collect();

        let [before_001, after_001, before_002, after_002] = lines.as_slice() else {
            panic!("expected four echoed lines, got {lines:?}");
        };

        assert!(before_001.starts_with("Order(id=001, gross_value=1000, net_value=0, "));
        assert!(before_001.contains("discount_category=Birthday"));
        assert!(after_001.starts_with("Order(id=001, gross_value=1000, net_value=900"));
        assert!(after_001.contains("is_paid=true"));

        assert!(before_002.starts_with("Order(id=002, gross_value=1000, net_value=0, "));
        assert!(before_002.contains("discount_category=-"));
        assert!(after_002.starts_with("Order(id=002, gross_value=1000, net_value=1000, "));
        assert!(after_002.contains("is_paid=false"));

        assert!(fixture.orders().iter().all(Order::is_priced));

        Ok(())
    }

    #[test]
    fn unpriced_orders_show_no_savings() -> TestResult {
        let orders =
            [Order::new("U1", Decimal::new(500, 0)).with_category(DiscountCategory::Vip)];

        let mut out = Vec::new();
        write_summary(&mut out, &orders)?;

        let output = String::from_utf8(out)?;
        let Some(row) = output.lines().find(|line| line.contains("U1")) else {
            panic!("missing order row");
        };

        assert_eq!(row.matches('-').count(), 1);

        Ok(())
    }

    #[test]
    fn renders_empty_table() -> TestResult {
        let mut out = Vec::new();

        write_summary(&mut out, &[])?;

        assert!(String::from_utf8(out)?.contains("Order"));

        Ok(())
    }
}
