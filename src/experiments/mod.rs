//! The seven experiment kernels
//!
//! Each kernel is a pure function over injected seed scalars and an
//! iteration count, so the driver can time them with process-scale counts
//! while tests run them with small counts and fixed seeds and assert on the
//! exact arithmetic.
//!
//! ## Kernel map
//!
//! ```text
//! test#1  scalar::multiply_chain          single accumulator, n iters
//! test#2  scalar::multiply_chain          single accumulator, 2n iters
//! test#3  scalar::multiply_chains3        3 independent accumulators (ILP)
//! test#4  buffer::multiply_fixed_array    [f64; 3], static inner bound
//! test#5  buffer::multiply_heap_buffer    Vec<f64>, runtime inner bound
//! test#6  buffer::multiply_heap_buffer    Vec<f64>, hard-coded length 3
//! test#7  delegated::multiply_delegated   outer runtime buffer, fixed-size
//!                                         update extracted into its own fn
//! ```
//!
//! Floating-point overflow to infinity is an accepted outcome at process
//! iteration counts; kernels neither detect nor report it.

pub mod buffer;
pub mod delegated;
pub mod scalar;
