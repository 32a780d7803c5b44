//! Per-period discounted cash flows.

use serde::{Deserialize, Serialize};

use crate::error::{PricingError, PricingResult};
use crate::pricer::discount_factor;
use crate::terms::BondTerms;

/// One coupon period's cash flow and its present value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountedCashFlow {
    /// Period number, starting at 1.
    pub period: u32,
    /// Coupon paid at the end of the period.
    pub coupon: f64,
    /// Redemption paid at the end of the period (face value on the last one).
    pub principal: f64,
    /// `1 / (1 + r)^period`.
    pub discount_factor: f64,
    /// `(coupon + principal) * discount_factor`.
    pub present_value: f64,
}

impl DiscountedCashFlow {
    /// Undiscounted amount paid in this period.
    pub fn amount(&self) -> f64 {
        self.coupon + self.principal
    }
}

/// Builds the discounted cash-flow schedule of a bond.
///
/// Empty for zero periods. Present values sum to the bond price up to
/// floating-point rounding. Allocates one row per period, so callers taking
/// untrusted period counts should bound them first.
///
/// Fails with [`PricingError::NonFinitePrice`] when a discounted amount
/// overflows.
pub fn cash_flow_schedule(terms: &BondTerms) -> PricingResult<Vec<DiscountedCashFlow>> {
    terms.validate()?;

    let coupon = terms.coupon_payment();
    let period_rate = terms.period_rate();

    let flows: Vec<DiscountedCashFlow> = (1..=terms.periods)
        .map(|period| {
            let principal = if period == terms.periods {
                terms.face_value
            } else {
                0.0
            };
            let df = discount_factor(period_rate, period);
            DiscountedCashFlow {
                period,
                coupon,
                principal,
                discount_factor: df,
                present_value: (coupon + principal) * df,
            }
        })
        .collect();

    if let Some(cf) = flows.iter().find(|cf| !cf.present_value.is_finite()) {
        return Err(PricingError::non_finite_price(cf.present_value));
    }

    Ok(flows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricer::price;
    use approx::assert_relative_eq;

    #[test]
    fn test_schedule_shape() {
        let terms = BondTerms::new(1000.0, 0.05, 10, 0.06);
        let flows = cash_flow_schedule(&terms).unwrap();

        assert_eq!(flows.len(), 10);
        assert_eq!(flows[0].period, 1);
        assert_eq!(flows[9].period, 10);
        assert!(flows[..9].iter().all(|cf| cf.principal == 0.0));
        assert_eq!(flows[9].principal, 1000.0);
        assert_relative_eq!(flows[9].amount(), 1025.0);
        assert_relative_eq!(flows[0].discount_factor, 1.0 / 1.03, epsilon = 1e-12);
    }

    #[test]
    fn test_schedule_sums_to_price() {
        let terms = BondTerms::new(1000.0, 0.07, 40, 0.045).with_frequency(4);
        let total: f64 = cash_flow_schedule(&terms)
            .unwrap()
            .iter()
            .map(|cf| cf.present_value)
            .sum();
        assert_relative_eq!(total, price(&terms).unwrap(), max_relative = 1e-12);
    }

    #[test]
    fn test_discount_factors_decrease() {
        let terms = BondTerms::new(100.0, 0.05, 12, 0.04).with_frequency(12);
        let flows = cash_flow_schedule(&terms).unwrap();
        assert!(flows
            .windows(2)
            .all(|w| w[1].discount_factor < w[0].discount_factor));
    }

    #[test]
    fn test_overflowing_discount_is_an_error() {
        let terms = BondTerms::new(1000.0, 0.05, 2000, -0.99).with_frequency(1);
        assert!(matches!(
            cash_flow_schedule(&terms),
            Err(PricingError::NonFinitePrice { .. })
        ));

        let terms = BondTerms::new(1000.0, 0.05, 10, -1.0).with_frequency(1);
        assert!(matches!(
            cash_flow_schedule(&terms),
            Err(PricingError::InvalidPeriodRate { .. })
        ));
    }

    #[test]
    fn test_empty_and_invalid() {
        let terms = BondTerms::new(1000.0, 0.05, 0, 0.06);
        assert!(cash_flow_schedule(&terms).unwrap().is_empty());

        let terms = terms.with_frequency(0);
        assert_eq!(
            cash_flow_schedule(&terms),
            Err(PricingError::InvalidFrequency { frequency: 0 })
        );
    }
}
