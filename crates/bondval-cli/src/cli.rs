//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{FuzzArgs, PriceArgs, ScheduleArgs};

/// Bondval - discounted cash-flow pricing of fixed-coupon bonds
#[derive(Parser)]
#[command(name = "bondval")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(
        short,
        long,
        value_enum,
        default_value = "table",
        env = "BONDVAL_FORMAT",
        global = true
    )]
    pub format: OutputFormat,

    /// Decimal places for amounts
    #[arg(long, default_value_t = 2, env = "BONDVAL_PRECISION", global = true)]
    pub precision: usize,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Defaults to `price` with the reference bond when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Price a bond from its yield to maturity
    Price(PriceArgs),

    /// Show the discounted cash-flow schedule of a bond
    Schedule(ScheduleArgs),

    /// Price randomly generated bonds and report any failures
    Fuzz(FuzzArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Self::Price(PriceArgs::default())
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}

/// Options shared by every command's output.
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub precision: usize,
    pub quiet: bool,
}
