//! The consecutive-run searcher: finds the longest contiguous run of
//! sequence elements whose sum stays within a bound and is itself prime.
//!
//! This is where both the runtime and the algorithmic subtlety live. The
//! scan is quadratic in shape but pruned hard: a window shorter than the
//! current champion can never win, so every start position begins its scan
//! at the champion's length, and a window whose sum passes the bound ends
//! that start position outright (sums only grow as the window extends).

use std::fmt;

use serde::Serialize;
use tracing::trace;

use crate::oracle::is_prime;

/// Outcome of a run search: the winning sum and the run's length.
///
/// Displays as the canonical result line:
///
/// ```
/// use primerun::search::RunResult;
///
/// let result = RunResult { sum: 41, length: 6 };
/// assert_eq!(result.to_string(), "Prime: 41, Length: 6");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunResult {
    /// Sum of the winning run — itself prime, and within the query bound.
    pub sum: u64,
    /// Number of consecutive elements in the winning run.
    pub length: usize,
}

impl RunResult {
    /// The no-qualifying-run sentinel. A normal return value, not an error.
    pub const NONE: Self = Self { sum: 0, length: 0 };

    /// Whether no run of length ≥ 1 qualified.
    pub fn is_none(&self) -> bool {
        self.length == 0
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Prime: {}, Length: {}", self.sum, self.length)
    }
}

/// Find the longest contiguous run of `elements` whose sum is at most
/// `target` and is prime.
///
/// `elements` is normally the full ascending prime sequence up to `target`,
/// but any ascending sequence of distinct positive integers works — the
/// elements themselves are never primality-tested, only the run sums.
///
/// Scan order: start indices `i` ascend; for each start, candidate end
/// indices `j` ascend from `i + best_length` (the range bound is fixed when
/// the inner loop begins, so a champion found mid-scan shifts the starting
/// `j` for later starts only). The window is the half-open `[i, j)`. The
/// first window sum past `target` ends that start position. Among runs of
/// equal maximal length the first one found wins; the champion is replaced
/// only on strictly greater length.
///
/// End indices stay strictly below the sequence length, so the window
/// covering the entire remaining tail is never evaluated. This mirrors the
/// classical formulation of the search; it only matters when the winning
/// run would have to include the very last element.
///
/// Window sums are read from a prefix-sum table instead of re-summing the
/// slice per window; the windows evaluated and the winner are unchanged by
/// that substitution. Sums accumulate in `u64`, which comfortably holds the
/// total of every prime below any practical bound.
///
/// Returns [`RunResult::NONE`] when no run of length ≥ 1 qualifies.
pub fn longest_sum_of_consecutive_primes(elements: &[u64], target: u64) -> RunResult {
    // prefix[k] holds the sum of elements[..k], so any window sum is one
    // subtraction away.
    let mut prefix = Vec::with_capacity(elements.len() + 1);
    let mut running: u64 = 0;
    prefix.push(running);
    for &value in elements {
        running += value;
        prefix.push(running);
    }

    let mut best = RunResult::NONE;

    for i in 0..elements.len() {
        for j in i + best.length..elements.len() {
            let sum = prefix[j] - prefix[i];
            if sum > target {
                break;
            }
            if j - i > best.length && is_prime(sum) {
                trace!(sum, length = j - i, start = i, "champion run replaced");
                best = RunResult { sum, length: j - i };
            }
        }
    }

    best
}
