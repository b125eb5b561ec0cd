//! # unroll-bench: Loop Unrolling & ILP Micro-Benchmark Harness
//!
//! unroll-bench times seven variants of a tight floating-point multiply loop
//! to make two compiler/CPU effects visible with nothing but a monotonic
//! clock:
//!
//! - **Instruction-level parallelism**: independent multiply chains in one
//!   loop body overlap in the pipeline (test#3 vs test#1).
//! - **Loop unrolling**: an inner loop with a compile-time-known bound is
//!   flattened into straight-line code (test#4/test#6), while the same loop
//!   over a runtime-sized buffer is not (test#5) — unless the fixed-bound
//!   update is extracted into its own routine (test#7).
//!
//! ## Design Principles (Toyota Way Aligned)
//!
//! - **Genchi Genbutsu**: measure the loops, don't reason about the optimizer
//! - **Jidoka**: kernels are pure functions over injected seeds, so results
//!   are deterministic and testable independently of timing
//! - **Poka-Yoke safety**: the fixed-size delegated update is length-guarded
//!   instead of trusting the caller's buffer
//!
//! ## Example Usage
//!
//! ```rust
//! use unroll_bench::experiments::scalar::multiply_chain;
//! use unroll_bench::timing::time_it;
//!
//! let timed = time_it(|| multiply_chain(5.0, 10));
//! assert_eq!(timed.value, 5120.0); // 5 * 2^10
//! println!("took {} us", timed.elapsed.as_micros());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod experiments;
pub mod harness;
pub mod seed;
pub mod timing;

pub use error::{Error, Result};

/// Outer iteration count shared by every experiment (test#2 doubles it).
pub const ITER_COUNT: u64 = 1_000_000_000;

/// Compile-time element count for the fixed-size kernels (test#4, test#6,
/// and the delegated update in test#7).
pub const FIXED_EL_COUNT: usize = 3;
