//! Bond terms.

use serde::{Deserialize, Serialize};

use crate::error::{PricingError, PricingResult};

/// Coupon frequency used when none is given (semiannual).
pub const DEFAULT_FREQUENCY: u32 = 2;

/// Immutable description of a fixed-coupon bond to price.
///
/// Rates are annualized decimal fractions (0.05 = 5%). `periods` counts the
/// remaining coupon periods, not years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondTerms {
    /// Redemption (par) amount paid at maturity.
    pub face_value: f64,
    /// Annual coupon rate.
    pub coupon_rate: f64,
    /// Remaining coupon periods.
    pub periods: u32,
    /// Annual yield to maturity.
    pub yield_to_maturity: f64,
    /// Coupon payments per year.
    pub frequency: u32,
}

impl BondTerms {
    /// Creates semiannual bond terms.
    ///
    /// Use [`BondTerms::with_frequency`] for any other payment frequency.
    #[must_use]
    pub fn new(face_value: f64, coupon_rate: f64, periods: u32, yield_to_maturity: f64) -> Self {
        Self {
            face_value,
            coupon_rate,
            periods,
            yield_to_maturity,
            frequency: DEFAULT_FREQUENCY,
        }
    }

    /// Creates bond terms from a maturity in whole years.
    ///
    /// The period count is `years * frequency`, saturating on overflow.
    #[must_use]
    pub fn from_years(
        face_value: f64,
        coupon_rate: f64,
        years: u32,
        yield_to_maturity: f64,
        frequency: u32,
    ) -> Self {
        Self {
            face_value,
            coupon_rate,
            periods: years.saturating_mul(frequency),
            yield_to_maturity,
            frequency,
        }
    }

    /// Sets the coupon frequency.
    #[must_use]
    pub fn with_frequency(mut self, frequency: u32) -> Self {
        self.frequency = frequency;
        self
    }

    /// Coupon paid each period: `coupon_rate * face_value / frequency`.
    ///
    /// Not meaningful for zero frequency; call [`BondTerms::validate`] first.
    pub fn coupon_payment(&self) -> f64 {
        (self.coupon_rate * self.face_value) / f64::from(self.frequency)
    }

    /// Yield per period: `yield_to_maturity / frequency`.
    pub fn period_rate(&self) -> f64 {
        self.yield_to_maturity / f64::from(self.frequency)
    }

    /// Checks that the terms can be priced.
    ///
    /// Zero frequency, non-finite real inputs and a yield per period at or
    /// below -1 are rejected. Other negative rates and zero periods are valid.
    pub fn validate(&self) -> PricingResult<()> {
        if self.frequency == 0 {
            return Err(PricingError::invalid_frequency(self.frequency));
        }

        for (field, value) in [
            ("face_value", self.face_value),
            ("coupon_rate", self.coupon_rate),
            ("yield_to_maturity", self.yield_to_maturity),
        ] {
            if !value.is_finite() {
                return Err(PricingError::non_finite(field, value));
            }
        }

        let period_rate = self.period_rate();
        if 1.0 + period_rate <= 0.0 {
            return Err(PricingError::invalid_period_rate(period_rate));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_defaults_to_semiannual() {
        let terms = BondTerms::new(1000.0, 0.05, 10, 0.06);
        assert_eq!(terms.frequency, DEFAULT_FREQUENCY);
        assert_eq!(terms.frequency, 2);
    }

    #[test]
    fn test_from_years() {
        let terms = BondTerms::from_years(1000.0, 0.05, 5, 0.06, 2);
        assert_eq!(terms.periods, 10);

        let monthly = BondTerms::from_years(1000.0, 0.05, 30, 0.06, 12);
        assert_eq!(monthly.periods, 360);

        let huge = BondTerms::from_years(1000.0, 0.05, u32::MAX, 0.06, 12);
        assert_eq!(huge.periods, u32::MAX);
    }

    #[test]
    fn test_per_period_amounts() {
        let terms = BondTerms::new(1000.0, 0.05, 10, 0.06);
        assert_relative_eq!(terms.coupon_payment(), 25.0);
        assert_relative_eq!(terms.period_rate(), 0.03);

        let quarterly = terms.with_frequency(4);
        assert_relative_eq!(quarterly.coupon_payment(), 12.5);
        assert_relative_eq!(quarterly.period_rate(), 0.015);
    }

    #[test]
    fn test_validate() {
        assert!(BondTerms::new(1000.0, 0.05, 10, 0.06).validate().is_ok());
        assert!(BondTerms::new(1000.0, -0.01, 0, -0.02).validate().is_ok());

        assert_eq!(
            BondTerms::new(1000.0, 0.05, 10, 0.06)
                .with_frequency(0)
                .validate(),
            Err(PricingError::InvalidFrequency { frequency: 0 })
        );

        let err = BondTerms::new(f64::NAN, 0.05, 10, 0.06).validate().unwrap_err();
        assert!(matches!(
            err,
            PricingError::NonFiniteInput {
                field: "face_value",
                ..
            }
        ));

        assert_eq!(
            BondTerms::new(1000.0, 0.05, 10, -1.0)
                .with_frequency(1)
                .validate(),
            Err(PricingError::InvalidPeriodRate { period_rate: -1.0 })
        );
        assert!(BondTerms::new(1000.0, 0.05, 10, -1.5)
            .with_frequency(2)
            .validate()
            .is_ok());
        assert!(matches!(
            BondTerms::new(1000.0, 0.05, 0, -2.5).validate(),
            Err(PricingError::InvalidPeriodRate { .. })
        ));

        let err = BondTerms::new(1000.0, 0.05, 10, f64::NEG_INFINITY)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            PricingError::NonFiniteInput {
                field: "yield_to_maturity",
                ..
            }
        ));
    }

    #[test]
    fn test_serde_field_names() {
        let terms = BondTerms::new(1000.0, 0.05, 10, 0.06);
        let json = serde_json::to_value(terms).unwrap();
        assert_eq!(json["face_value"], 1000.0);
        assert_eq!(json["periods"], 10);
        assert_eq!(json["frequency"], 2);

        let back: BondTerms = serde_json::from_value(json).unwrap();
        assert_eq!(back, terms);
    }
}
