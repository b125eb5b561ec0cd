//! Delegated fixed-size update (test#7)
//!
//! Same runtime-sized outer buffer as test#5, but the per-iteration update
//! of the first 3 elements lives in its own routine whose internal bound is
//! a compile-time constant. The compiler can unroll that routine in
//! isolation, even though the caller's buffer length is unknown.
//!
//! The original updated the first 3 elements unchecked, which is
//! out-of-bounds for buffers shorter than 3. Here the outer driver guards
//! the length once, before the timed loop, and rejects short buffers.

use crate::error::{Error, Result};
use crate::FIXED_EL_COUNT;

use super::buffer::BUFFER_FACTOR;

/// Multiply the first 3 elements of `buf` by 3.
///
/// The bound is the compile-time constant [`FIXED_EL_COUNT`], not
/// `buf.len()`.
///
/// # Panics
///
/// Panics if `buf` has fewer than 3 elements. Callers in this crate guard
/// the length before entering their timed loop.
pub fn calc_first3(buf: &mut [f64]) {
    for el in &mut buf[..FIXED_EL_COUNT] {
        *el *= BUFFER_FACTOR;
    }
}

/// Apply [`calc_first3`] to `buf`, `iters` times.
///
/// # Errors
///
/// Returns [`Error::BufferTooSmall`] if `buf` has fewer than 3 elements;
/// the check runs once, outside the timed loop.
pub fn multiply_delegated(buf: &mut [f64], iters: u64) -> Result<()> {
    if buf.len() < FIXED_EL_COUNT {
        return Err(Error::BufferTooSmall {
            required: FIXED_EL_COUNT,
            actual: buf.len(),
        });
    }
    for _ in 0..iters {
        calc_first3(buf);
    }
    Ok(())
}
