//! Command-line entry point.
//!
//! Usage: `unroll-bench [element_count]`
//!
//! `element_count` sizes the runtime heap buffers of test#5 and test#7.
//! Without it the driver prints `spec el count` and exits non-zero before
//! running anything: the runtime-sized experiments are the contrast cases
//! the fixed-size ones exist for, so a partial run has no value.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use unroll_bench::error::{Error, Result};
use unroll_bench::harness::run_experiments;
use unroll_bench::seed::SeedSource;
use unroll_bench::ITER_COUNT;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(env::args().nth(1), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Guard failures share the report stream; Error::MissingElementCount
            // displays as the `spec el count` usage line.
            let _ = writeln!(out, "{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(arg: Option<String>, out: &mut impl Write) -> anyhow::Result<()> {
    let el_count = parse_element_count(arg)?;
    let mut seeds = SeedSource::from_entropy();
    run_experiments(&mut seeds, el_count, ITER_COUNT, out).context("experiment run failed")
}

fn parse_element_count(arg: Option<String>) -> Result<usize> {
    let raw = arg.ok_or(Error::MissingElementCount)?;
    raw.parse()
        .map_err(|e: std::num::ParseIntError| Error::InvalidElementCount {
            input: raw.clone(),
            reason: e.to_string(),
        })
}
