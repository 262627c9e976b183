//! Order Discounts demo
//!
//! Prints each order before and after its discount is calculated, followed by
//! a summary table.

use std::{io, process};

use thiserror::Error;
use tracing::info;

use order_discounts::prelude::*;

use crate::{
    config::Config,
    observability::{ObservabilityError, init_subscriber},
};

mod config;
mod observability;

#[derive(Debug, Error)]
enum DemoError {
    #[error(transparent)]
    Observability(#[from] ObservabilityError),

    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error(transparent)]
    Discount(#[from] DiscountError),

    #[error(transparent)]
    Summary(#[from] SummaryError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Order Discounts demo entry point
pub fn main() {
    let config = Config::load().unwrap_or_else(|e| e.exit());

    if let Err(error) = run(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "errors are reported to the user on stderr"
        )]
        {
            eprintln!("{error}");
        }

        #[expect(clippy::exit, reason = "non-zero exit status on failure")]
        {
            process::exit(1);
        }
    }
}

fn run(config: &Config) -> Result<(), DemoError> {
    init_subscriber(config)?;

    let mut fixture = match &config.fixture {
        Some(path) => {
            info!(path = %path.display(), "loading order fixture");

            Fixture::from_path(path)?
        }
        None => Fixture::demo(),
    };

    config.apply_rate_overrides(fixture.rates_mut())?;

    let calculator = DiscountCalculator::with_rates(*fixture.rates());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    write_priced_orders(&mut out, &calculator, fixture.orders_mut())?;
    write_summary(&mut out, fixture.orders())?;

    Ok(())
}
