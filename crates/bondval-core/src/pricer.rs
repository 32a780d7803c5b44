//! Discounted cash-flow bond pricer.
//!
//! Each coupon and the final redemption are discounted back to today at the
//! per-period yield and summed:
//!
//! ```text
//! C = coupon_rate * face / frequency
//! r = yield_to_maturity / frequency
//! price = sum_{t=1..n} C / (1 + r)^t  +  face / (1 + r)^n
//! ```
//!
//! The coupon leg is accumulated term by term in ascending period order.
//! [`closed_form_price`] evaluates the annuity identity instead and is kept
//! as an independent cross-check.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{PricingError, PricingResult};
use crate::terms::BondTerms;

/// Intermediate quantities of a price calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Coupon paid each period.
    pub coupon_payment: f64,
    /// Yield per period.
    pub period_rate: f64,
    /// Present value of all coupons.
    pub pv_coupons: f64,
    /// Present value of the redemption.
    pub pv_face: f64,
    /// Total present value (`pv_coupons + pv_face`).
    pub price: f64,
}

/// Discount factor `1 / (1 + rate)^period`.
#[inline]
pub(crate) fn discount_factor(period_rate: f64, period: u32) -> f64 {
    1.0 / (1.0 + period_rate).powf(f64::from(period))
}

/// Prices a bond and returns both present-value legs.
pub fn price_breakdown(terms: &BondTerms) -> PricingResult<PriceBreakdown> {
    terms.validate()?;

    let coupon_payment = terms.coupon_payment();
    let period_rate = terms.period_rate();
    let growth = 1.0 + period_rate;

    let mut pv_coupons = 0.0;
    for t in 1..=terms.periods {
        pv_coupons += coupon_payment / growth.powf(f64::from(t));
    }

    let pv_face = terms.face_value / growth.powf(f64::from(terms.periods));
    let price = pv_coupons + pv_face;

    if !price.is_finite() {
        return Err(PricingError::non_finite_price(price));
    }

    trace!(
        "coupon={coupon_payment} rate={period_rate} pv_coupons={pv_coupons} pv_face={pv_face}"
    );
    debug!("priced {:?} at {price}", terms);

    Ok(PriceBreakdown {
        coupon_payment,
        period_rate,
        pv_coupons,
        pv_face,
        price,
    })
}

/// Present value of the bond.
///
/// Zero periods prices at `face_value`. Zero frequency fails with
/// [`PricingError::InvalidFrequency`], and a discounting overflow with
/// [`PricingError::NonFinitePrice`] rather than returning infinity.
pub fn price(terms: &BondTerms) -> PricingResult<f64> {
    price_breakdown(terms).map(|b| b.price)
}

/// Present value of the bond from flat arguments.
///
/// Unlike [`BondTerms::new`], the frequency has no default here.
pub fn price_bond(
    face_value: f64,
    coupon_rate: f64,
    periods: u32,
    yield_to_maturity: f64,
    frequency: u32,
) -> PricingResult<f64> {
    let terms = BondTerms::new(face_value, coupon_rate, periods, yield_to_maturity)
        .with_frequency(frequency);
    price(&terms)
}

/// Present value from the closed-form annuity identity.
///
/// `C * (1 - v^n) / r + F * v^n` with `v = 1 / (1 + r)`, or `C * n + F` when
/// the period rate is zero.
pub fn closed_form_price(terms: &BondTerms) -> PricingResult<f64> {
    terms.validate()?;

    let coupon_payment = terms.coupon_payment();
    let period_rate = terms.period_rate();
    let n = f64::from(terms.periods);

    if period_rate == 0.0 {
        return Ok(coupon_payment * n + terms.face_value);
    }

    let v_n = discount_factor(period_rate, terms.periods);
    let value = coupon_payment * (1.0 - v_n) / period_rate + terms.face_value * v_n;
    if !value.is_finite() {
        return Err(PricingError::non_finite_price(value));
    }
    Ok(value)
}

/// Discounted cash-flow pricing engine.
///
/// Stateless; every method delegates to the free functions of this module.
#[derive(Debug, Clone, Copy, Default)]
pub struct BondPricer;

impl BondPricer {
    /// Creates a new pricer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// See [`price`].
    pub fn price(&self, terms: &BondTerms) -> PricingResult<f64> {
        price(terms)
    }

    /// See [`price_breakdown`].
    pub fn breakdown(&self, terms: &BondTerms) -> PricingResult<PriceBreakdown> {
        price_breakdown(terms)
    }

    /// See [`cash_flow_schedule`](crate::schedule::cash_flow_schedule).
    pub fn schedule(
        &self,
        terms: &BondTerms,
    ) -> PricingResult<Vec<crate::schedule::DiscountedCashFlow>> {
        crate::schedule::cash_flow_schedule(terms)
    }
}
