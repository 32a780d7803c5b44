//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid face value.
    #[error("Invalid face value: {0}. Must be positive.")]
    InvalidFace(f64),

    /// Invalid coupon rate.
    #[error("Invalid coupon rate: {0}. Must be a decimal between -1 and 1 (0.05 = 5%).")]
    InvalidCoupon(f64),

    /// Invalid yield.
    #[error("Invalid yield: {0}. Must be a decimal between -1 and 1 (0.06 = 6%).")]
    InvalidYield(f64),

    /// Too many coupon periods.
    #[error("Invalid period count: {periods}. At most {max} periods are supported.")]
    InvalidPeriods {
        /// The requested period count.
        periods: u32,
        /// The supported maximum.
        max: u32,
    },

    /// Pricing failed.
    #[error(transparent)]
    Pricing(#[from] bondval_core::PricingError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
