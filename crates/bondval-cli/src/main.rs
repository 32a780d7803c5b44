//! Bondval CLI - discounted cash-flow bond pricing.
//!
//! # Usage
//!
//! ```bash
//! # Price the reference bond (1000 face, 5% coupon, 6% yield, 5y semiannual)
//! bondval
//!
//! # Price a bond
//! bondval price --face 1000 --coupon 0.05 --ytm 0.06 --years 5 --frequency 2
//!
//! # Show its discounted cash flows
//! bondval schedule --coupon 0.04 --ytm 0.05 --periods 4
//!
//! # Price 1000 random bonds
//! bondval fuzz --iterations 1000 --seed 42
//! ```
//!
//! Log output goes to stderr and is controlled by `RUST_LOG` or `-v`.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands, OutputOptions};

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn,bondval=info",
        1 => "info,bondval=debug,bondval_core=debug",
        _ => "debug,bondval=trace,bondval_core=trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let opts = OutputOptions {
        format: cli.format,
        precision: cli.precision,
        quiet: cli.quiet,
    };

    match cli.command.unwrap_or_default() {
        Commands::Price(args) => commands::price::execute(args, opts)?,
        Commands::Schedule(args) => commands::schedule::execute(args, opts)?,
        Commands::Fuzz(args) => commands::fuzz::execute(args, opts)?,
    }

    Ok(())
}
