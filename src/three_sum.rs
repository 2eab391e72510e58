// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Triplet-sum search: fix one element, delegate the rest to the pair scan.

use crate::contracts::check_triplet_sums_to;
use crate::two_sum::two_sum;
use crate::types::Triplet;

/// Find a triplet of values summing to `target` in a slice sorted
/// non-decreasing.
///
/// For each index `i` the scan fixes `seq[i]` and asks [`two_sum`] for a pair
/// summing to `target - seq[i]` in the strict suffix `seq[i+1..]`. The suffix
/// is a borrowed subslice, so fixing an element costs nothing beyond the inner
/// scan. The first fixed index with a hit wins.
///
/// The triplet is reported as the pair followed by the fixed element, so it is
/// generally not in sorted order: `three_sum(&[1, 2, 3, 4, 5, 6], 7)` yields
/// `Triplet([2, 4, 1])`.
///
/// Fixing the last index leaves an empty suffix, which [`two_sum`] answers
/// with a trivial `None` - no special-casing needed.
///
/// # Precondition
///
/// `seq` must be sorted in non-decreasing order (inherited from [`two_sum`]).
///
/// O(N²) time, O(1) additional space.
///
/// ```
/// use pincer::{three_sum, Triplet};
///
/// assert_eq!(three_sum(&[1, 2, 3, 4, 5, 6], 7), Some(Triplet([2, 4, 1])));
/// assert_eq!(three_sum(&[1, 2, 4], 10), None);
/// ```
pub fn three_sum(seq: &[i64], target: i64) -> Option<Triplet> {
    for (i, &fixed) in seq.iter().enumerate() {
        if let Some(pair) = two_sum(&seq[i + 1..], target - fixed) {
            let [a, b] = pair.values();
            let triplet = Triplet([a, b, fixed]);
            check_triplet_sums_to(triplet, target);
            return Some(triplet);
        }
    }

    None
}
