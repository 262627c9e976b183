//! Demo configuration

use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;

use order_discounts::discounts::{DiscountCategory, DiscountError, DiscountRates};

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Order discount demo configuration
#[derive(Debug, Parser)]
#[command(
    name = "order-discounts",
    about = "Price orders with per-category discount strategies",
    long_about = None
)]
pub(crate) struct Config {
    /// YAML order set to price instead of the built-in sample orders
    #[arg(short, long, env = "ORDERS_FIXTURE")]
    pub(crate) fixture: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub(crate) log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub(crate) log_format: LogFormat,

    /// Fraction taken off coupon orders (e.g. 0.15)
    #[arg(long, env = "COUPON_RATE")]
    pub(crate) coupon_rate: Option<Decimal>,

    /// Fraction taken off VIP orders
    #[arg(long, env = "VIP_RATE")]
    pub(crate) vip_rate: Option<Decimal>,

    /// Fraction taken off seasonal orders
    #[arg(long, env = "SEASONAL_RATE")]
    pub(crate) seasonal_rate: Option<Decimal>,

    /// Fraction taken off birthday orders
    #[arg(long, env = "BIRTHDAY_RATE")]
    pub(crate) birthday_rate: Option<Decimal>,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Apply the rate overrides given on the command line on top of `rates`.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::PercentageOutOfRange`] if an override is outside `0..=1`.
    pub(crate) fn apply_rate_overrides(
        &self,
        rates: &mut DiscountRates,
    ) -> Result<(), DiscountError> {
        let overrides = [
            (DiscountCategory::Coupon, self.coupon_rate),
            (DiscountCategory::Vip, self.vip_rate),
            (DiscountCategory::Seasonal, self.seasonal_rate),
            (DiscountCategory::Birthday, self.birthday_rate),
        ];

        for (category, value) in overrides {
            if let Some(value) = value {
                rates.set_rate(category, value)?;
            }
        }

        Ok(())
    }
}
