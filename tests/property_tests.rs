//! Property-based tests for the even-term sum
//!
//! These tests use proptest to check the bounded sum against an independent brute-force
//! summation across many randomly chosen bounds.

use even_fib::sum_even_terms_below;
use proptest::prelude::*;

/// Brute-force reference: build the term list with a plain loop, then filter and sum.
fn brute_force(bound: u32) -> u64 {
    let bound = u64::from(bound);
    let mut terms = vec![0u64, 1];
    loop {
        let n = terms.len();
        let next = terms[n - 1] + terms[n - 2];
        if next >= bound {
            break;
        }
        terms.push(next);
    }
    terms.into_iter().filter(|t| *t < bound && t % 2 == 0).sum()
}

// =============================================================================
// Fixed cases
// =============================================================================

#[test]
fn brute_force_agrees_on_selected_bounds() {
    for bound in [0, 1, 2, 10, 100, 1_000, 4_000_000, u32::MAX] {
        assert_eq!(sum_even_terms_below(bound), brute_force(bound), "bound {bound}");
    }
}

#[test]
fn bound_ten_sums_zero_two_eight() {
    assert_eq!(sum_even_terms_below(10), 10);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Property: the iterator-based sum equals the brute-force sum for any bound
    #[test]
    fn matches_brute_force(bound in any::<u32>()) {
        prop_assert_eq!(sum_even_terms_below(bound), brute_force(bound));
    }

    /// Property: raising the bound never lowers the sum
    #[test]
    fn monotonic_in_bound(a in any::<u32>(), b in any::<u32>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(sum_even_terms_below(lo) <= sum_even_terms_below(hi));
    }

    /// Property: bounds of 0 or 1 admit no non-zero term
    #[test]
    fn tiny_bounds_sum_to_zero(bound in 0u32..=1) {
        prop_assert_eq!(sum_even_terms_below(bound), 0);
    }
}
