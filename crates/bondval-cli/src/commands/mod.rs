//! CLI command implementations.

pub mod fuzz;
pub mod price;
pub mod schedule;

pub use fuzz::FuzzArgs;
pub use price::PriceArgs;
pub use schedule::ScheduleArgs;

use clap::Args;

use bondval_core::{BondTerms, DEFAULT_FREQUENCY};

use crate::error::{CliError, CliResult};

/// Face value of the reference bond.
pub const DEFAULT_FACE: f64 = 1000.0;
/// Coupon rate of the reference bond.
pub const DEFAULT_COUPON: f64 = 0.05;
/// Yield to maturity of the reference bond.
pub const DEFAULT_YTM: f64 = 0.06;
/// Years to maturity of the reference bond.
pub const DEFAULT_YEARS: u32 = 5;
/// Largest period count accepted (e.g. 100 years of weekly coupons is 5200).
pub const MAX_PERIODS: u32 = 10_000;

/// Bond terms shared by the pricing commands.
///
/// Defaults describe the reference bond: 1000 face, 5% semiannual coupon,
/// 5 years to maturity, 6% yield.
#[derive(Args, Debug, Clone)]
pub struct BondArgs {
    /// Face (par) value
    #[arg(long, default_value_t = DEFAULT_FACE, allow_negative_numbers = true)]
    pub face: f64,

    /// Annual coupon rate as a decimal (0.05 = 5%)
    #[arg(short, long, default_value_t = DEFAULT_COUPON, allow_negative_numbers = true)]
    pub coupon: f64,

    /// Annual yield to maturity as a decimal (0.06 = 6%)
    #[arg(short, long, default_value_t = DEFAULT_YTM, allow_negative_numbers = true)]
    pub ytm: f64,

    /// Years to maturity; periods = years * frequency
    #[arg(long, default_value_t = DEFAULT_YEARS, conflicts_with = "periods")]
    pub years: u32,

    /// Remaining coupon periods (instead of --years), at most 10000
    #[arg(short = 'n', long)]
    pub periods: Option<u32>,

    /// Coupon frequency: 1=Annual, 2=SemiAnnual, 4=Quarterly, 12=Monthly
    #[arg(long, default_value_t = DEFAULT_FREQUENCY)]
    pub frequency: u32,
}

impl Default for BondArgs {
    fn default() -> Self {
        Self {
            face: DEFAULT_FACE,
            coupon: DEFAULT_COUPON,
            ytm: DEFAULT_YTM,
            years: DEFAULT_YEARS,
            periods: None,
            frequency: DEFAULT_FREQUENCY,
        }
    }
}

impl BondArgs {
    /// Validates the arguments and builds the bond terms.
    pub fn to_terms(&self) -> CliResult<BondTerms> {
        let face = validate_face(self.face)?;
        let coupon = validate_coupon(self.coupon)?;
        let ytm = validate_yield(self.ytm)?;

        let terms = match self.periods {
            Some(periods) => BondTerms::new(face, coupon, periods, ytm).with_frequency(self.frequency),
            None => BondTerms::from_years(face, coupon, self.years, ytm, self.frequency),
        };
        validate_periods(terms.periods)?;
        terms.validate()?;
        Ok(terms)
    }
}

/// Validates a face value.
pub fn validate_face(face: f64) -> CliResult<f64> {
    if !(face.is_finite() && face > 0.0) {
        return Err(CliError::InvalidFace(face));
    }
    Ok(face)
}

/// Validates a period count against [`MAX_PERIODS`].
pub fn validate_periods(periods: u32) -> CliResult<u32> {
    if periods > MAX_PERIODS {
        return Err(CliError::InvalidPeriods {
            periods,
            max: MAX_PERIODS,
        });
    }
    Ok(periods)
}

/// Validates a coupon rate.
pub fn validate_coupon(coupon: f64) -> CliResult<f64> {
    if !(-1.0 < coupon && coupon < 1.0) {
        return Err(CliError::InvalidCoupon(coupon));
    }
    Ok(coupon)
}

/// Validates a yield value.
pub fn validate_yield(yield_value: f64) -> CliResult<f64> {
    if !(-1.0 < yield_value && yield_value < 1.0) {
        return Err(CliError::InvalidYield(yield_value));
    }
    Ok(yield_value)
}
