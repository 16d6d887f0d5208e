// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! `Intersection`, `Difference`, and `Complement`.
//!
//! Both algorithms below compute the identical canonical result the spec's iterator/erase
//! choreography (FindIntersectionCandidate + FindNextIntersectingPair) produces, but as a single
//! linear merge over the two orderings. Both are disjoint, ascending sequences of intervals, so
//! a merge is the natural shape here - the same idea the teacher's own two-pointer
//! `intersection::apply` uses, just restated over half-open intervals instead of closed ones.
//! Either direction is an amortized `O(|self| + |other|)` walk with no backtracking.

use super::Interval;
use alloc::collections::VecDeque;

/// Returns the intervals that lie in both `a` and `b`.
#[inline]
pub(super) fn intersect<T: Ord + Copy>(
    a: &VecDeque<Interval<T>>,
    b: &VecDeque<Interval<T>>,
) -> VecDeque<Interval<T>> {
    let mut out = VecDeque::new();

    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        let ai = a[i];
        let bj = b[j];

        let overlap = ai.intersection(&bj);
        if !overlap.is_empty() {
            out.push_back(overlap);
        }

        // advance whichever interval ends first; it cannot overlap anything further on the
        // other side
        if ai.max() < bj.max() {
            i += 1;
        } else {
            j += 1;
        }
    }

    out
}

/// Returns `true` as soon as any stored interval of `a` overlaps any stored interval of `b`,
/// without materializing the intersection.
#[inline]
pub(super) fn intersects<T: Ord + Copy>(a: &VecDeque<Interval<T>>, b: &VecDeque<Interval<T>>) -> bool {
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        let ai = a[i];
        let bj = b[j];

        if ai.intersects(&bj) {
            return true;
        }

        if ai.max() <= bj.min() {
            i += 1;
        } else {
            j += 1;
        }
    }

    false
}

/// Returns the intervals that lie in `a` but not in `b`.
#[inline]
pub(super) fn difference<T: Ord + Copy>(
    a: &VecDeque<Interval<T>>,
    b: &VecDeque<Interval<T>>,
) -> VecDeque<Interval<T>> {
    let mut out = VecDeque::new();

    let mut j = 0;

    for &ai in a.iter() {
        let mut remainder = ai;

        while j < b.len() && !remainder.is_empty() && b[j].min() < remainder.max() {
            let bj = b[j];

            if bj.min() > remainder.min() {
                out.push_back(Interval::new(remainder.min(), bj.min()));
            }

            if bj.max() > remainder.min() {
                remainder.set_min(bj.max());
            }

            if bj.max() <= ai.max() {
                // `bj` is entirely consumed by `ai`'s original span; later `a` intervals start
                // no earlier than `ai` did, so `bj` can never be relevant again
                j += 1;
            } else {
                // `bj` extends past `ai`; it may still subtract from the next `a` interval
                break;
            }
        }

        if !remainder.is_empty() {
            out.push_back(remainder);
        }
    }

    out
}
