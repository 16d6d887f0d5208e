// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! The ordered index backing [`super::IntervalSet`].
//!
//! Rust doesn't offer a comparator-parameterized ordered set in `alloc`, so the index is a
//! `VecDeque<Interval<T>>` that is kept sorted under the `LESS` relation from the container spec
//! at all times, with `lower_bound`/`upper_bound` implemented as a manual binary search. `LESS`
//! orders primarily by ascending `min`, breaking ties by descending `max`:
//!
//! ```text
//! LESS(a, b) = a.min < b.min || (a.min == b.min && a.max > b.max)
//! ```
//!
//! The descending-`max` tiebreak only matters when comparing a stored interval against an empty
//! probe interval sharing the same `min` - no two intervals that are both actually stored ever
//! share a `min`, since the container only ever holds pairwise-disjoint intervals.

use super::Interval;

/// Returns `true` if `a` strictly precedes `b` under `LESS`.
#[inline]
fn less<T: Ord>(a: &Interval<T>, b: &Interval<T>) -> bool {
    a.min() < b.min() || (a.min() == b.min() && a.max() > b.max())
}

/// Returns the index of the first stored interval that does not precede `probe` under `LESS`,
/// i.e. the first interval that could contain or follow `probe`.
#[inline]
pub(crate) fn lower_bound<T: Ord + Copy>(
    intervals: &alloc::collections::VecDeque<Interval<T>>,
    probe: &Interval<T>,
) -> usize {
    let mut lo = 0;
    let mut hi = intervals.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if less(&intervals[mid], probe) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Returns the index of the first stored interval that strictly follows `probe` under `LESS`.
#[inline]
pub(crate) fn upper_bound<T: Ord + Copy>(
    intervals: &alloc::collections::VecDeque<Interval<T>>,
    probe: &Interval<T>,
) -> usize {
    let mut lo = 0;
    let mut hi = intervals.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if less(probe, &intervals[mid]) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}
