//! Longest sum of consecutive primes below a bound.
//!
//! `primerun` answers one query shape: for a bound N, which prime ≤ N is
//! the sum of the longest possible run of consecutive primes (taken in
//! ascending order from the primes ≤ N, with no gaps)? For the reference
//! bound of 1,000,000 the answer is 997,651 — the sum of 543 consecutive
//! primes.
//!
//! The pipeline has three stages, consumed in strict order:
//!
//! 1. [`oracle::is_prime`] — deterministic trial-division primality test.
//! 2. [`generate`] — materialize the ascending prime sequence up to N,
//!    either per-candidate through the oracle or via a sieve of
//!    Eratosthenes (identical output, selected by
//!    [`GeneratorKind`](generate::GeneratorKind)).
//! 3. [`search`] — scan the sequence for the longest contiguous run whose
//!    sum stays within N and is itself prime.
//!
//! # Getting started
//!
//! ```
//! use primerun::query::Query;
//!
//! let result = Query::new(1_000).run();
//! assert_eq!(result.to_string(), "Prime: 953, Length: 21");
//! ```
//!
//! Or use the one-call convenience wrapper:
//!
//! ```
//! let result = primerun::longest_prime_run(100);
//! assert_eq!((result.sum, result.length), (41, 6));
//! ```
//!
//! Queries are single-threaded, synchronous, and share no state; each one
//! builds a fresh prime sequence and discards it when the search finishes.

pub mod generate;
pub mod oracle;
pub mod query;
pub mod search;

pub use generate::GeneratorKind;
pub use query::Query;
pub use search::RunResult;

/// The reference bound: the classic query asks for the longest run whose
/// sum stays below one million.
pub const DEFAULT_TARGET: u64 = 1_000_000;

/// Run the full pipeline against `target` with the default generator.
///
/// Convenience wrapper over [`Query`]; equivalent to
/// `Query::new(target).run()`.
pub fn longest_prime_run(target: u64) -> RunResult {
    Query::new(target).run()
}
