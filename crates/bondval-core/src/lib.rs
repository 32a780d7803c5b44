//! # Bondval Core
//!
//! Discounted cash-flow pricing of fixed-coupon bonds.
//!
//! This crate provides:
//!
//! - **Terms**: [`BondTerms`], the immutable description of a bond to price
//! - **Pricing**: [`price`], [`price_bond`] and the [`BondPricer`] engine
//! - **Breakdown**: present value of coupons and of the redemption, separately
//! - **Schedule**: per-period discounted cash flows
//!
//! ## Example
//!
//! ```rust
//! use bondval_core::prelude::*;
//!
//! // 5% semiannual coupon, 5 years remaining, priced at a 6% yield
//! let terms = BondTerms::new(1000.0, 0.05, 10, 0.06);
//! let value = price(&terms).unwrap();
//! assert!((value - 957.35).abs() < 0.01);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod pricer;
pub mod schedule;
pub mod terms;

pub use error::{PricingError, PricingResult};
pub use pricer::{
    closed_form_price, price, price_bond, price_breakdown, BondPricer, PriceBreakdown,
};
pub use schedule::{cash_flow_schedule, DiscountedCashFlow};
pub use terms::{BondTerms, DEFAULT_FREQUENCY};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{PricingError, PricingResult};
    pub use crate::pricer::{price, price_bond, BondPricer, PriceBreakdown};
    pub use crate::schedule::{cash_flow_schedule, DiscountedCashFlow};
    pub use crate::terms::{BondTerms, DEFAULT_FREQUENCY};
}
