// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! `Add`, `AddOptimizedForAppend`, `Compact`, and `Union`.

use super::{index, Interval};
use alloc::collections::VecDeque;

/// Inserts `interval` into `intervals`, merging it with any neighbor it now overlaps or
/// touches.
///
/// `interval` is assumed already known to be non-empty by the caller.
#[inline]
pub(super) fn add<T: Ord + Copy>(intervals: &mut VecDeque<Interval<T>>, interval: Interval<T>) {
    let at = index::lower_bound(intervals, &interval);

    if let Some(existing) = intervals.get(at) {
        if *existing == interval {
            // exact duplicate key already present; Add is idempotent
            return;
        }
    }

    intervals.insert(at, interval);

    // the newly-inserted interval may now overlap or abut its left neighbor, and an arbitrary
    // run of later intervals whose `min` falls at or before `interval.max()`. `upper_bound` of
    // the empty probe `[max, max)` lands just past the last interval that could possibly touch
    // or overlap it.
    let left = at.saturating_sub(1);
    let right = index::upper_bound(intervals, &Interval::point(interval.max()));

    compact(intervals, left, right);
}

/// Fast path for `Add` when `interval` extends the current rightmost interval.
///
/// Falls back to [`add`] whenever the fast-path preconditions don't hold, so it is always safe
/// to call in place of `add` - the two agree everywhere the fast path applies.
#[inline]
pub(super) fn add_optimized_for_append<T: Ord + Copy>(
    intervals: &mut VecDeque<Interval<T>>,
    interval: Interval<T>,
) {
    let last = match intervals.back_mut() {
        Some(last) => last,
        None => return add(intervals, interval),
    };

    if interval.min() < last.min() || interval.min() > last.max() {
        return add(intervals, interval);
    }

    if interval.max() <= last.max() {
        // fully covered already
        return;
    }

    // `last.min()` is unchanged, so ordering is preserved, and `last` remains the last interval,
    // so there is no right neighbor to become adjacent to.
    last.set_max(interval.max());
}

/// Restores canonical form over the half-open index range `[begin, end)`, merging any
/// interval with its successor whenever `prev.max() >= successor.min()`.
///
/// The remainder of `intervals` outside of `[begin, end)` is assumed already canonical.
#[inline]
pub(super) fn compact<T: Ord + Copy>(intervals: &mut VecDeque<Interval<T>>, begin: usize, end: usize) {
    let mut i = begin;
    let mut end = end.min(intervals.len());

    while i + 1 < end {
        let should_merge = intervals[i].max() >= intervals[i + 1].min();

        if !should_merge {
            i += 1;
            continue;
        }

        let merged_max = if intervals[i].max() >= intervals[i + 1].max() {
            intervals[i].max()
        } else {
            intervals[i + 1].max()
        };

        intervals[i].set_max(merged_max);
        intervals.remove(i + 1);
        end -= 1;
    }
}

/// `Union`: bulk-inserts every element of `other` into `intervals`, then runs a single
/// [`compact`] pass over the whole index.
///
/// This is correct but not minimal in work - acceptable because union is amortized on the total
/// number of intervals in both sets.
#[inline]
pub(super) fn union<T: Ord + Copy>(
    intervals: &mut VecDeque<Interval<T>>,
    other: &VecDeque<Interval<T>>,
) {
    for &interval in other.iter() {
        let at = index::lower_bound(intervals, &interval);
        intervals.insert(at, interval);
    }

    let len = intervals.len();
    compact(intervals, 0, len);
}
