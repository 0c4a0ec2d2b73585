//! One-shot query wiring the full pipeline:
//! oracle → generator → searcher → [`RunResult`].
//!
//! Each query owns its own prime sequence for the duration of the search
//! and discards it afterwards; nothing is shared across queries.

use tracing::debug;

use crate::generate::GeneratorKind;
use crate::search::{RunResult, longest_sum_of_consecutive_primes};

/// A single longest-run query against a bound.
///
/// Builder in the usual shape: construct with the bound, override the
/// generator if wanted, then [`run`](Self::run).
///
/// # Example
///
/// ```
/// use primerun::generate::GeneratorKind;
/// use primerun::query::Query;
///
/// let result = Query::new(100).run();
/// assert_eq!((result.sum, result.length), (41, 6));
///
/// // The sieve generator produces identical results.
/// let result = Query::new(100).with_generator(GeneratorKind::Sieve).run();
/// assert_eq!((result.sum, result.length), (41, 6));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Query {
    target: u64,
    generator: GeneratorKind,
}

impl Query {
    /// A query for the longest qualifying run with sums bounded by `target`.
    pub fn new(target: u64) -> Self {
        Self {
            target,
            generator: GeneratorKind::default(),
        }
    }

    /// Select how the prime sequence is materialized.
    pub fn with_generator(mut self, generator: GeneratorKind) -> Self {
        self.generator = generator;
        self
    }

    /// The inclusive bound this query runs against.
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Run the pipeline to completion and return the winning run.
    pub fn run(&self) -> RunResult {
        let primes = self.generator.generate(self.target);
        debug!(
            count = primes.len(),
            target = self.target,
            generator = ?self.generator,
            "prime sequence materialized"
        );

        let result = longest_sum_of_consecutive_primes(&primes, self.target);
        debug!(%result, "search finished");
        result
    }
}
