//! Sequential experiment driver
//!
//! Runs the seven experiments in order against an injected seed source and
//! iteration count, writing the two contractual report lines per experiment.
//! The binary passes [`crate::ITER_COUNT`] and an entropy-seeded source;
//! tests pass a fixed seed and a small count and assert on the exact output.

use std::io::Write;

use tracing::debug;

use crate::error::Result;
use crate::experiments::buffer::{
    fixed_len_heap_buffer, multiply_fixed_array, multiply_heap_buffer, sum,
};
use crate::experiments::delegated::multiply_delegated;
use crate::experiments::scalar::{multiply_chain, multiply_chains3};
use crate::seed::SeedSource;
use crate::timing::{time_it, JoinedResults, Measurement};
use crate::FIXED_EL_COUNT;

/// Number of experiments the harness runs.
pub const EXPERIMENT_COUNT: u32 = 7;

/// Run all seven experiments in order.
///
/// `el_count` sizes the runtime heap buffers of test#5 and test#7. Each
/// buffer is owned by its experiment alone and dropped before the next one
/// starts.
///
/// # Errors
///
/// Returns [`crate::Error::BufferTooSmall`] from test#7 when `el_count` is
/// below 3 (the original indexed out of bounds here), and propagates writer
/// errors.
pub fn run_experiments(
    seeds: &mut SeedSource,
    el_count: usize,
    iters: u64,
    out: &mut impl Write,
) -> Result<()> {
    debug!(el_count, iters, "starting experiments");

    // test#1: one serial multiply chain
    let seed = seeds.next_scalar();
    let timed = time_it(|| multiply_chain(seed, iters));
    report(&Measurement::from_timed(1, &timed), out)?;

    // test#2: same chain, doubled iteration count
    let seed = seeds.next_scalar();
    let timed = time_it(|| multiply_chain(seed, iters * 2));
    report(&Measurement::from_timed(2, &timed), out)?;

    // test#3: three independent chains in one loop body
    let seed3 = seeds.scalar_array();
    let timed = time_it(|| multiply_chains3(seed3, iters));
    report(&Measurement::new(3, timed.elapsed, JoinedResults(timed.value)), out)?;

    // test#4: stack array, inner bound known at compile time
    let seed3: [f64; FIXED_EL_COUNT] = seeds.scalar_array();
    let timed = time_it(|| sum(&multiply_fixed_array(seed3, iters)));
    report(&Measurement::from_timed(4, &timed), out)?;

    // test#5: heap buffer sized from process input, bound unknown
    let mut buf = seeds.scalars(el_count);
    let timed = time_it(|| {
        multiply_heap_buffer(&mut buf, iters);
        sum(&buf)
    });
    report(&Measurement::from_timed(5, &timed), out)?;
    drop(buf);

    // test#6: heap buffer again, but with a hard-coded length of 3
    let mut buf = fixed_len_heap_buffer(seeds.scalar_array());
    let timed = time_it(|| {
        multiply_heap_buffer(&mut buf, iters);
        sum(&buf)
    });
    report(&Measurement::from_timed(6, &timed), out)?;
    drop(buf);

    // test#7: runtime-sized buffer, fixed-size update in its own routine
    let mut buf = seeds.scalars(el_count);
    let timed = time_it(|| -> Result<f64> {
        multiply_delegated(&mut buf, iters)?;
        Ok(sum(&buf))
    });
    let result = timed.value?;
    report(&Measurement::new(7, timed.elapsed, result), out)?;

    Ok(())
}

fn report(measurement: &Measurement, out: &mut impl Write) -> Result<()> {
    debug!(
        label = measurement.label(),
        elapsed_us = measurement.elapsed_us(),
        "experiment finished"
    );
    measurement.write_report(out)?;
    Ok(())
}
