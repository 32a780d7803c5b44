//! Error types for bond pricing.

use thiserror::Error;

/// A specialized Result type for pricing operations.
pub type PricingResult<T> = Result<T, PricingError>;

/// Errors that can occur while pricing a bond.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Coupon frequency of zero payments per year.
    #[error("Invalid frequency: {frequency}. Must be at least one payment per year.")]
    InvalidFrequency {
        /// The rejected frequency.
        frequency: u32,
    },

    /// A real-valued input was NaN or infinite.
    #[error("Non-finite {field}: {value}")]
    NonFiniteInput {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Yield per period at or below -100%, so `1 + r` cannot discount.
    #[error("Invalid period rate: {period_rate}. Yield per period must be above -1.")]
    InvalidPeriodRate {
        /// The rejected per-period yield.
        period_rate: f64,
    },

    /// Discounting overflowed to a non-finite present value.
    #[error("Non-finite present value: {value}")]
    NonFinitePrice {
        /// The overflowed value.
        value: f64,
    },
}

impl PricingError {
    /// Creates an invalid frequency error.
    #[must_use]
    pub fn invalid_frequency(frequency: u32) -> Self {
        Self::InvalidFrequency { frequency }
    }

    /// Creates a non-finite input error.
    #[must_use]
    pub fn non_finite(field: &'static str, value: f64) -> Self {
        Self::NonFiniteInput { field, value }
    }

    /// Creates an invalid period rate error.
    #[must_use]
    pub fn invalid_period_rate(period_rate: f64) -> Self {
        Self::InvalidPeriodRate { period_rate }
    }

    /// Creates a non-finite price error.
    #[must_use]
    pub fn non_finite_price(value: f64) -> Self {
        Self::NonFinitePrice { value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PricingError::invalid_frequency(0);
        assert_eq!(
            err.to_string(),
            "Invalid frequency: 0. Must be at least one payment per year."
        );

        let err = PricingError::non_finite("yield_to_maturity", f64::INFINITY);
        assert_eq!(err.to_string(), "Non-finite yield_to_maturity: inf");

        let err = PricingError::invalid_period_rate(-1.0);
        assert_eq!(
            err.to_string(),
            "Invalid period rate: -1. Yield per period must be above -1."
        );

        let err = PricingError::non_finite_price(f64::INFINITY);
        assert_eq!(err.to_string(), "Non-finite present value: inf");
    }
}
