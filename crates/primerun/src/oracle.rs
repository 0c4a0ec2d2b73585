//! Deterministic primality testing by trial division.
//!
//! The oracle is the leaf of the pipeline: the generator calls it once per
//! candidate and the searcher calls it once per run sum, so it stays
//! stateless and allocation-free. No probabilistic shortcuts, no
//! memoization — the same input always takes the same path.

/// Test whether `n` is prime by trial division.
///
/// Divides by every integer in `2..=⌊√n⌋` and reports false on the first
/// exact divisor. Values below 2 are never prime. O(√n) per call.
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    let limit = n.isqrt();
    let mut i = 2;
    while i <= limit {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}
