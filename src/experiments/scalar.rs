//! Scalar multiply chains (test#1, test#2, test#3)
//!
//! A single accumulator forms one dependency chain: every multiply waits on
//! the previous one, so elapsed time scales with the iteration count
//! (test#2 vs test#1). Three independent accumulators in the same loop body
//! give the CPU three chains to overlap (test#3).

/// Multiply factor for the single-chain experiments.
const CHAIN_FACTOR: f64 = 2.0;

/// Distinct factors for the three independent chains.
const CHAIN3_FACTORS: [f64; 3] = [2.0, 3.0, 4.0];

/// Multiply `seed` by 2, `iters` times, as one serial dependency chain.
#[must_use]
pub fn multiply_chain(seed: f64, iters: u64) -> f64 {
    let mut n = seed;
    for _ in 0..iters {
        n *= CHAIN_FACTOR;
    }
    n
}

/// Multiply three independent accumulators by 2, 3 and 4 respectively,
/// `iters` times, inside a single loop body.
#[must_use]
pub fn multiply_chains3(seeds: [f64; 3], iters: u64) -> [f64; 3] {
    let [mut n, mut n2, mut n3] = seeds;
    for _ in 0..iters {
        n *= CHAIN3_FACTORS[0];
        n2 *= CHAIN3_FACTORS[1];
        n3 *= CHAIN3_FACTORS[2];
    }
    [n, n2, n3]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_doubles_each_iteration() {
        // 5 * 2^10 = 5120
        assert_eq!(multiply_chain(5.0, 10), 5120.0);
    }

    #[test]
    fn test_chain_zero_iterations_is_identity() {
        assert_eq!(multiply_chain(123.0, 0), 123.0);
    }

    #[test]
    fn test_chains3_independent_factors() {
        let [a, b, c] = multiply_chains3([5.0, 5.0, 5.0], 10);
        assert_eq!(a, 5.0 * 2f64.powi(10));
        assert_eq!(b, 5.0 * 3f64.powi(10));
        assert_eq!(c, 5.0 * 4f64.powi(10));
    }

    #[test]
    fn test_chain_overflows_to_infinity() {
        // 2^2000 is far past f64::MAX; overflow is accepted, not trapped
        assert_eq!(multiply_chain(1.0, 2000), f64::INFINITY);
    }

    #[test]
    fn test_chain_zero_seed_stays_zero() {
        assert_eq!(multiply_chain(0.0, 64), 0.0);
    }
}
