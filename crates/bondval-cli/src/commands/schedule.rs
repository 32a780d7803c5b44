//! Schedule command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bondval_core::{cash_flow_schedule, DiscountedCashFlow};

use crate::cli::{OutputFormat, OutputOptions};
use crate::commands::BondArgs;
use crate::output::{format_amount, print_csv, print_header, print_json, print_output};

/// Arguments for the schedule command.
#[derive(Args, Debug, Clone)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub bond: BondArgs,
}

/// Display row of the cash-flow table.
#[derive(Debug, Serialize, Tabled)]
struct ScheduleRow {
    #[tabled(rename = "Period")]
    period: u32,
    #[tabled(rename = "Coupon")]
    coupon: String,
    #[tabled(rename = "Principal")]
    principal: String,
    #[tabled(rename = "Discount Factor")]
    discount_factor: String,
    #[tabled(rename = "Present Value")]
    present_value: String,
}

impl ScheduleRow {
    fn new(cf: &DiscountedCashFlow, precision: usize) -> Self {
        Self {
            period: cf.period,
            coupon: format_amount(cf.coupon, precision),
            principal: format_amount(cf.principal, precision),
            discount_factor: format!("{:.6}", cf.discount_factor),
            present_value: format_amount(cf.present_value, precision),
        }
    }
}

/// Execute the schedule command.
pub fn execute(args: ScheduleArgs, opts: OutputOptions) -> Result<()> {
    let terms = args.bond.to_terms()?;
    let flows = cash_flow_schedule(&terms)?;
    let total: f64 = flows.iter().map(|cf| cf.present_value).sum();

    match opts.format {
        OutputFormat::Json => print_json(&flows)?,
        OutputFormat::Table => {
            if !opts.quiet {
                print_header("Discounted Cash Flows");
            }
            let rows: Vec<_> = flows
                .iter()
                .map(|cf| ScheduleRow::new(cf, opts.precision))
                .collect();
            print_output(&rows, opts.format)?;
            if !opts.quiet {
                println!("Total present value: {}", format_amount(total, opts.precision));
            }
        }
        // raw values, one row per period
        OutputFormat::Csv | OutputFormat::Minimal => print_csv(&flows)?,
    }

    Ok(())
}
