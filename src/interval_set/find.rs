// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! `Find`, `LowerBound`, `UpperBound`, `Contains`, and `IsDisjoint`.

use super::{index, Interval};
use alloc::collections::VecDeque;

/// Returns the index of the stored interval containing `value`, or `None`.
#[inline]
pub(super) fn find_value<T: Ord + Copy>(intervals: &VecDeque<Interval<T>>, value: T) -> Option<usize> {
    find_interval(intervals, &Interval::point(value))
}

/// Returns the index of a stored interval that intersects `probe`, or `None`.
///
/// `probe` may itself be empty (a point lookup is expressed as `Interval::point(value)`); the
/// comparator's descending-`max` tiebreak ensures the decrement below reaches a stored interval
/// that shares `probe`'s `min` and has a larger `max`.
#[inline]
pub(super) fn find_interval<T: Ord + Copy>(
    intervals: &VecDeque<Interval<T>>,
    probe: &Interval<T>,
) -> Option<usize> {
    let at = index::upper_bound(intervals, probe);

    let candidate = at.checked_sub(1)?;
    let interval = intervals.get(candidate)?;

    if interval.contains_value(&probe.min()) {
        Some(candidate)
    } else {
        None
    }
}

/// The first stored interval that contains, or is entirely after, `value`.
#[inline]
pub(super) fn lower_bound<T: Ord + Copy>(intervals: &VecDeque<Interval<T>>, value: T) -> usize {
    let probe = Interval::point(value);
    let at = index::lower_bound(intervals, &probe);

    if let Some(prev) = at.checked_sub(1) {
        if intervals[prev].contains_value(&value) {
            return prev;
        }
    }

    at
}

/// The first stored interval strictly after `value`.
#[inline]
pub(super) fn upper_bound<T: Ord + Copy>(intervals: &VecDeque<Interval<T>>, value: T) -> usize {
    index::upper_bound(intervals, &Interval::point(value))
}

/// Returns `true` if no stored interval of `intervals` overlaps `interval`.
#[inline]
pub(super) fn is_disjoint<T: Ord + Copy>(intervals: &VecDeque<Interval<T>>, interval: &Interval<T>) -> bool {
    if interval.is_empty() {
        return true;
    }

    let probe = Interval::point(interval.min());
    let at = index::upper_bound(intervals, &probe);

    if let Some(candidate) = intervals.get(at) {
        if interval.max() > candidate.min() {
            return false;
        }
    }

    match at.checked_sub(1) {
        None => true,
        Some(prev) => intervals[prev].max() <= interval.min(),
    }
}
