//! Fibonacci term iteration.
//!
//! The sequence is tracked with a cursor of two adjacent terms `(prev, curr)`. Each step yields `prev` and
//! advances the cursor to `(curr, prev + curr)`.

/// Initial cursor of the sequence: `(prev, curr)`.
pub const SEED: (u64, u64) = (0, 1);

/// Iterate Fibonacci terms starting from [`SEED`]: 0, 1, 1, 2, 3, 5, 8, ...
///
/// The iterator ends after F(93), the last term that fits in a `u64`, rather than overflowing.
#[derive(Debug, Clone)]
pub struct FibTerms {
    /// `None` once exhausted. The inner `None` marks a `curr` that no longer fits in a `u64`.
    cursor: Option<(u64, Option<u64>)>,
}

impl FibTerms {
    pub fn new() -> Self {
        let (prev, curr) = SEED;
        Self {
            cursor: Some((prev, Some(curr))),
        }
    }
}

impl Default for FibTerms {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibTerms {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let (prev, curr) = self.cursor?;
        self.cursor = curr.map(|curr| (curr, prev.checked_add(curr)));
        Some(prev)
    }
}

impl std::iter::FusedIterator for FibTerms {}

/// Parity test used to select terms: remainder by two.
#[inline]
pub const fn is_even(term: u64) -> bool {
    term % 2 == 0
}
