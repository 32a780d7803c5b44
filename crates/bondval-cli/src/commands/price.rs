//! Price command implementation.
//!
//! Prices a bond from its yield to maturity.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::debug;

use bondval_core::{price_breakdown, BondTerms, PriceBreakdown};

use crate::cli::{OutputFormat, OutputOptions};
use crate::commands::BondArgs;
use crate::output::{print_header, print_json, print_output, KeyValue};

/// Arguments for the price command.
#[derive(Args, Debug, Clone, Default)]
pub struct PriceArgs {
    #[command(flatten)]
    pub bond: BondArgs,
}

/// JSON shape of a priced bond.
#[derive(Debug, Serialize)]
struct PriceReport {
    terms: BondTerms,
    #[serde(flatten)]
    breakdown: PriceBreakdown,
}

/// Execute the price command.
pub fn execute(args: PriceArgs, opts: OutputOptions) -> Result<()> {
    let terms = args.bond.to_terms()?;
    let breakdown = price_breakdown(&terms)?;
    debug!(price = breakdown.price, periods = terms.periods, "bond priced");

    let prec = opts.precision;
    let results = vec![
        KeyValue::from_amount("Face Value", terms.face_value, prec),
        KeyValue::from_percent("Coupon Rate", terms.coupon_rate),
        KeyValue::from_percent("Yield to Maturity", terms.yield_to_maturity),
        KeyValue::new("Frequency", terms.frequency.to_string()),
        KeyValue::new("Periods", terms.periods.to_string()),
        KeyValue::from_amount("Coupon Payment", breakdown.coupon_payment, prec),
        KeyValue::from_percent("Period Rate", breakdown.period_rate),
        KeyValue::from_amount("PV of Coupons", breakdown.pv_coupons, prec),
        KeyValue::from_amount("PV of Face", breakdown.pv_face, prec),
        KeyValue::from_amount("Bond Price", breakdown.price, prec),
    ];

    match opts.format {
        OutputFormat::Table => {
            if !opts.quiet {
                print_header("Bond Pricing Results");
            }
            print_output(&results, opts.format)?;
        }
        OutputFormat::Json => {
            print_json(&PriceReport { terms, breakdown })?;
        }
        OutputFormat::Csv => {
            print_output(&results, opts.format)?;
        }
        OutputFormat::Minimal => {
            println!("{:.prec$}", breakdown.price);
        }
    }

    Ok(())
}
