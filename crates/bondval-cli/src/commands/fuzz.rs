//! Fuzz command implementation.
//!
//! Prices randomly generated plain-vanilla bonds and reports every input that
//! fails to price or prices to a non-finite value.

use anyhow::{bail, Result};
use clap::Args;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, warn};

use bondval_core::{price, BondTerms};

use crate::cli::{OutputFormat, OutputOptions};
use crate::output::{print_error, print_json, print_success};

const FREQUENCIES: [u32; 4] = [1, 2, 4, 12];

/// Arguments for the fuzz command.
#[derive(Args, Debug, Clone)]
pub struct FuzzArgs {
    /// Number of random bonds to price
    #[arg(short, long, default_value_t = 200)]
    pub iterations: usize,

    /// Seed for reproducible runs (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// An input that could not be priced.
#[derive(Debug, Clone, Serialize)]
pub struct FuzzFailure {
    pub terms: BondTerms,
    pub reason: String,
}

/// Outcome of a fuzz run.
#[derive(Debug, Clone, Serialize)]
pub struct FuzzReport {
    pub seed: u64,
    pub iterations: usize,
    pub failures: Vec<FuzzFailure>,
}

/// Draws one bond from the fuzzing ranges.
pub fn random_terms<R: Rng + ?Sized>(rng: &mut R) -> BondTerms {
    let face_value = rng.gen_range(100.0..10_000.0);
    let coupon_rate = rng.gen_range(0.0..0.20);
    let yield_to_maturity = rng.gen_range(0.0001..0.20);
    let frequency = *FREQUENCIES.choose(rng).unwrap_or(&2);
    let periods = rng.gen_range(1..=60);

    BondTerms::new(face_value, coupon_rate, periods, yield_to_maturity).with_frequency(frequency)
}

/// Prices `iterations` random bonds drawn from a seeded generator.
pub fn run(iterations: usize, seed: u64) -> FuzzReport {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut failures = Vec::new();

    for _ in 0..iterations {
        let terms = random_terms(&mut rng);
        match price(&terms) {
            Ok(value) if value.is_finite() => {
                debug!(?terms, price = value, "priced");
            }
            Ok(value) => {
                warn!(?terms, price = value, "non-finite price");
                failures.push(FuzzFailure {
                    terms,
                    reason: format!("non-finite price {value}"),
                });
            }
            Err(err) => {
                warn!(?terms, error = %err, "pricing failed");
                failures.push(FuzzFailure {
                    terms,
                    reason: err.to_string(),
                });
            }
        }
    }

    FuzzReport {
        seed,
        iterations,
        failures,
    }
}

/// Execute the fuzz command.
pub fn execute(args: FuzzArgs, opts: OutputOptions) -> Result<()> {
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(seed, iterations = args.iterations, "starting fuzz run");

    let report = run(args.iterations, seed);
    info!(failures = report.failures.len(), "fuzz run complete");

    match opts.format {
        OutputFormat::Json => print_json(&report)?,
        _ => {
            if report.failures.is_empty() {
                if !opts.quiet {
                    print_success(&format!(
                        "{} bonds priced (seed {})",
                        report.iterations, report.seed
                    ));
                }
            } else {
                for failure in &report.failures {
                    print_error(&format!("{:?}: {}", failure.terms, failure.reason));
                }
            }
        }
    }

    if !report.failures.is_empty() {
        bail!(
            "{} of {} inputs failed (seed {})",
            report.failures.len(),
            report.iterations,
            report.seed
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_terms_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let terms = random_terms(&mut rng);
            assert!((100.0..10_000.0).contains(&terms.face_value));
            assert!((0.0..0.20).contains(&terms.coupon_rate));
            assert!((0.0001..0.20).contains(&terms.yield_to_maturity));
            assert!(FREQUENCIES.contains(&terms.frequency));
            assert!((1..=60).contains(&terms.periods));
        }
    }

    #[test]
    fn test_run_has_no_failures() {
        let report = run(500, 42);
        assert_eq!(report.iterations, 500);
        assert!(report.failures.is_empty(), "{:?}", report.failures);
    }

    #[test]
    fn test_run_is_reproducible() {
        let mut a = StdRng::seed_from_u64(11);
        let mut b = StdRng::seed_from_u64(11);
        assert_eq!(random_terms(&mut a), random_terms(&mut b));
    }
}
