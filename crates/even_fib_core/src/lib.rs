//! Sum the even-valued Fibonacci terms below a fixed bound.
//!
//! This crate is the pure half of `even-fib`: no IO, no global state and no dependencies. The CLI crate
//! wraps [`compute`] with timing and output.
//!
//! ## Notes
//!
//! - The sequence starts from the cursor `(0, 1)`, so 0 is visited and counted as an even term. It adds nothing
//!   to the sum, which is why starting from `(1, 2)` gives the same answer.
//! - Bounds are `u32`. Every term below such a bound, and the sum of all of them, fits in a `u64`, so the sum is
//!   infallible.

pub mod sequence;

pub use sequence::{FibTerms, SEED, is_even};

/// Exclusive ceiling below which terms are considered.
pub const UPPER_BOUND: u32 = 4_000_000;

/// Sum the even-valued Fibonacci terms below [`UPPER_BOUND`].
///
/// ```
/// assert_eq!(even_fib_core::compute(), 4_613_732);
/// ```
pub fn compute() -> u64 {
    sum_even_terms_below(UPPER_BOUND)
}

/// Sum the even-valued Fibonacci terms strictly below `bound`.
///
/// Walks the sequence from [`SEED`] while the current term is below `bound`, adding each even term.
/// A bound of 0 or 1 yields 0.
pub fn sum_even_terms_below(bound: u32) -> u64 {
    let bound = u64::from(bound);
    FibTerms::new()
        .take_while(|&term| term < bound)
        .filter(|&term| is_even(term))
        .sum()
}
