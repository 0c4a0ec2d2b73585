//! Prime sequence generation up to an inclusive bound.
//!
//! Two interchangeable generators materialize the ascending sequence of
//! every prime in `[2, target]`: per-candidate trial division through the
//! [`oracle`](crate::oracle), and a sieve of Eratosthenes. The searcher
//! needs the whole sequence up front for indexed window evaluation, so both
//! return a fully built `Vec` rather than streaming.

use crate::oracle::is_prime;

/// Which algorithm materializes the prime sequence.
///
/// Both kinds yield the identical sequence. The sieve trades O(target)
/// memory for far fewer division operations and is the better choice for
/// large bounds; trial division allocates nothing beyond the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GeneratorKind {
    /// Test every candidate in `2..=target` with the oracle.
    #[default]
    TrialDivision,
    /// Mark composites with a sieve of Eratosthenes, then collect.
    Sieve,
}

impl GeneratorKind {
    /// Materialize the ascending sequence of primes in `[2, target]`.
    pub fn generate(self, target: u64) -> Vec<u64> {
        match self {
            Self::TrialDivision => generate_primes(target),
            Self::Sieve => sieve_primes(target),
        }
    }
}

/// Every prime in `[2, target]`, ascending, one oracle call per candidate.
///
/// Targets below 2 produce an empty sequence.
pub fn generate_primes(target: u64) -> Vec<u64> {
    (2..=target).filter(|&n| is_prime(n)).collect()
}

/// Every prime in `[2, target]`, ascending, via a sieve of Eratosthenes.
///
/// Drop-in replacement for [`generate_primes`]: same sequence, no
/// per-candidate division.
pub fn sieve_primes(target: u64) -> Vec<u64> {
    if target < 2 {
        return Vec::new();
    }

    let limit = target as usize;
    let mut composite = vec![false; limit + 1];

    let mut i = 2;
    while i * i <= limit {
        if !composite[i] {
            let mut multiple = i * i;
            while multiple <= limit {
                composite[multiple] = true;
                multiple += i;
            }
        }
        i += 1;
    }

    (2..=limit)
        .filter(|&n| !composite[n])
        .map(|n| n as u64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_below_two_yield_empty_sequence() {
        assert!(generate_primes(0).is_empty());
        assert!(generate_primes(1).is_empty());
        assert!(sieve_primes(0).is_empty());
        assert!(sieve_primes(1).is_empty());
    }

    #[test]
    fn smallest_targets() {
        assert_eq!(generate_primes(2), vec![2]);
        assert_eq!(generate_primes(3), vec![2, 3]);
        assert_eq!(sieve_primes(2), vec![2]);
    }

    #[test]
    fn first_primes_in_order() {
        assert_eq!(generate_primes(13), vec![2, 3, 5, 7, 11, 13]);
    }

    #[test]
    fn every_prime_below_hundred_appears_exactly_once() {
        let primes = generate_primes(100);
        assert_eq!(primes.len(), 25);
        assert_eq!(primes.first(), Some(&2));
        assert_eq!(primes.last(), Some(&97));
    }

    #[test]
    fn sequence_is_strictly_ascending() {
        // The searcher's pruning rule relies on this invariant.
        let primes = sieve_primes(10_000);
        assert!(primes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn every_element_is_prime() {
        assert!(sieve_primes(1_000).iter().all(|&p| is_prime(p)));
    }

    #[test]
    fn sieve_matches_trial_division() {
        for target in [0, 1, 2, 3, 10, 100, 1_000, 10_000] {
            assert_eq!(
                sieve_primes(target),
                generate_primes(target),
                "generators disagree at target {target}"
            );
        }
    }

    #[test]
    fn generator_kind_dispatch() {
        assert_eq!(GeneratorKind::TrialDivision.generate(30), sieve_primes(30));
        assert_eq!(GeneratorKind::Sieve.generate(30), generate_primes(30));
        assert_eq!(GeneratorKind::default(), GeneratorKind::TrialDivision);
    }
}
