//! Buffer multiply kernels (test#4, test#5, test#6)
//!
//! The same nested loop over two container shapes. For the stack array the
//! inner bound is the const generic `N`, known at compile time, so the inner
//! loop unrolls into straight-line independent multiplies. For the slice the
//! bound is its runtime length; when that length comes from process input
//! (test#5) no unrolling is possible, while a hard-coded length (test#6)
//! restores it even though the storage stays on the heap.

use crate::FIXED_EL_COUNT;

/// Multiply factor shared by all buffer kernels.
pub const BUFFER_FACTOR: f64 = 3.0;

/// Multiply every element of a statically-sized array by 3, `iters` times.
#[must_use]
pub fn multiply_fixed_array<const N: usize>(seeds: [f64; N], iters: u64) -> [f64; N] {
    let mut elements = seeds;
    for _ in 0..iters {
        for el in &mut elements {
            *el *= BUFFER_FACTOR;
        }
    }
    elements
}

/// Multiply every element of a runtime-sized buffer by 3, `iters` times.
pub fn multiply_heap_buffer(buf: &mut [f64], iters: u64) {
    for _ in 0..iters {
        for el in buf.iter_mut() {
            *el *= BUFFER_FACTOR;
        }
    }
}

/// Post-loop element sum, the single reported result value.
#[must_use]
pub fn sum(elements: &[f64]) -> f64 {
    elements.iter().sum()
}

/// Seed buffer for test#6: heap storage, but the length is the compile-time
/// constant 3 rather than process input.
#[must_use]
pub fn fixed_len_heap_buffer(seeds: [f64; FIXED_EL_COUNT]) -> Vec<f64> {
    seeds.to_vec()
}
