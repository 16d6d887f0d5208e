// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod add;
mod find;
mod index;
mod interval;
mod iter;
mod setops;

#[cfg(test)]
mod tests;

use alloc::collections::VecDeque;
use core::fmt;

pub use interval::Interval;
pub use iter::Iter;

/// An ordered, canonical set of half-open intervals `[min, max)` over a totally-ordered,
/// `Copy` domain `T`.
///
/// `IntervalSet` always keeps its intervals in the minimal representation: every stored
/// [`Interval`] is non-empty, they're kept in ascending order by `min`, and no two stored
/// intervals are adjacent or overlapping (inserting `[0, 4)` and `[4, 8)` produces the single
/// interval `[0, 8)`, not two). This makes the set a compact way to track things like "which
/// byte offsets of a stream have been received" without paying for one entry per value.
///
/// ```
/// use s2n_quic_interval_set::IntervalSet;
///
/// let mut set = IntervalSet::new();
/// set.add(0..4);
/// set.add(12..15);
/// set.add(18..21);
/// assert_eq!(set.len(), 3);
///
/// // bridges the gap between the first two intervals
/// set.add(4..12);
/// assert_eq!(set.len(), 2);
///
/// set.difference(&IntervalSet::from(0..21));
/// assert!(set.is_empty());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct IntervalSet<T> {
    intervals: VecDeque<Interval<T>>,
}

impl<T> Default for IntervalSet<T> {
    #[inline]
    fn default() -> Self {
        Self {
            intervals: VecDeque::new(),
        }
    }
}

impl<T> IntervalSet<T> {
    /// Creates an empty `IntervalSet`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty `IntervalSet` with at least `capacity` intervals' worth of storage
    /// preallocated.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            intervals: VecDeque::with_capacity(capacity),
        }
    }

    /// Returns the number of intervals stored (not the number of values they cover - see
    /// [`Interval::len`] for that, per-interval).
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if the set holds no intervals.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Removes every interval from the set.
    #[inline]
    pub fn clear(&mut self) {
        self.intervals.clear();
    }

    /// Exchanges the contents of `self` and `other` in O(1).
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.intervals, &mut other.intervals);
    }
}

impl<T: Ord + Copy> IntervalSet<T> {
    /// Creates a set containing the single interval `[min, max)`.
    ///
    /// `min >= max` produces an empty set, just as adding an empty interval would be a no-op.
    #[inline]
    pub fn from_bounds(min: T, max: T) -> Self {
        let mut set = Self::new();
        set.add(Interval::new(min, max));
        set
    }

    /// The smallest interval containing every interval in the set, or `None` if the set is
    /// empty.
    #[inline]
    pub fn spanning_interval(&self) -> Option<Interval<T>> {
        let first = self.intervals.front()?;
        let last = self.intervals.back()?;
        Some(Interval::new(first.min(), last.max()))
    }

    /// Inserts `interval` into the set, merging it with any interval it now overlaps or
    /// touches. An empty `interval` is silently ignored.
    #[inline]
    pub fn add(&mut self, interval: impl Into<Interval<T>>) {
        let interval = interval.into();
        if interval.is_empty() {
            return;
        }

        add::add(&mut self.intervals, interval);
        self.assert_valid();
    }

    /// Like [`Self::add`], but takes a fast path when `interval` extends the current rightmost
    /// interval, falling back to [`Self::add`] otherwise.
    ///
    /// Use this when inserting in increasing order (e.g. as bytes arrive on a stream in order)
    /// to avoid a search over the whole set.
    #[inline]
    pub fn add_optimized_for_append(&mut self, interval: impl Into<Interval<T>>) {
        let interval = interval.into();
        if interval.is_empty() {
            return;
        }

        add::add_optimized_for_append(&mut self.intervals, interval);
        self.assert_valid();
    }

    /// Performs a union in place: afterwards, `self` contains every value that was in `self` or
    /// `other`.
    #[inline]
    pub fn union(&mut self, other: &Self) {
        if self.intervals.is_empty() {
            self.intervals.clone_from(&other.intervals);
            return;
        }

        if other.intervals.is_empty() {
            return;
        }

        add::union(&mut self.intervals, &other.intervals);
        self.assert_valid();
    }

    /// Performs an intersection in place: afterwards, `self` contains every value that was in
    /// both `self` and `other`.
    #[inline]
    pub fn intersection(&mut self, other: &Self) {
        self.intervals = setops::intersect(&self.intervals, &other.intervals);
        self.assert_valid();
    }

    /// Performs a difference in place: afterwards, `self` contains every value that was in
    /// `self` but not in `other`.
    #[inline]
    pub fn difference(&mut self, other: &Self) {
        self.intervals = setops::difference(&self.intervals, &other.intervals);
        self.assert_valid();
    }

    /// Replaces `self` with its complement relative to `[min, max)`: afterwards, `self` contains
    /// every value in `[min, max)` that was *not* in `self` before the call.
    #[inline]
    pub fn complement(&mut self, min: T, max: T) {
        let universe = VecDeque::from([Interval::new(min, max)]);
        self.intervals = setops::difference(&universe, &self.intervals);
        self.assert_valid();
    }

    /// Returns `true` if `value` is covered by some interval in the set.
    #[inline]
    pub fn contains_value(&self, value: T) -> bool {
        find::find_value(&self.intervals, value).is_some()
    }

    /// Returns `true` if `interval` is fully covered by a single interval in the set.
    ///
    /// An empty `interval` is never contained, matching [`Interval::contains`]'s convention.
    #[inline]
    pub fn contains_interval(&self, interval: &Interval<T>) -> bool {
        if interval.is_empty() {
            return false;
        }

        match find::find_interval(&self.intervals, interval) {
            Some(at) => self.intervals[at].contains(interval),
            None => false,
        }
    }

    /// Returns `true` if every interval of `other` is fully covered by the set.
    ///
    /// An empty `other` returns `false`. Runs in `O(|other| * log |self|)`.
    #[inline]
    pub fn contains_set(&self, other: &Self) -> bool {
        if other.is_empty() {
            return false;
        }

        let (self_span, other_span) = match (self.spanning_interval(), other.spanning_interval())
        {
            (Some(a), Some(b)) => (a, b),
            _ => return false,
        };

        if !self_span.contains(&other_span) {
            return false;
        }

        other.intervals.iter().all(|i| self.contains_interval(i))
    }

    /// Returns `true` if `self` and `other` share no values.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        setops::intersects(&self.intervals, &other.intervals)
    }

    /// Returns `true` if `interval` shares no values with any interval in the set.
    #[inline]
    pub fn is_disjoint(&self, interval: &Interval<T>) -> bool {
        find::is_disjoint(&self.intervals, interval)
    }

    /// Returns the stored interval containing `value`, if any.
    #[inline]
    pub fn find(&self, value: T) -> Option<Interval<T>> {
        find::find_value(&self.intervals, value).map(|at| self.intervals[at])
    }

    /// Returns the first stored interval that contains, or is entirely after, `value`.
    #[inline]
    pub fn lower_bound(&self, value: T) -> Option<Interval<T>> {
        let at = find::lower_bound(&self.intervals, value);
        self.intervals.get(at).copied()
    }

    /// Returns the first stored interval strictly after `value`.
    #[inline]
    pub fn upper_bound(&self, value: T) -> Option<Interval<T>> {
        let at = find::upper_bound(&self.intervals, value);
        self.intervals.get(at).copied()
    }

    /// Replaces the set's contents with the intervals yielded by `intervals`.
    #[inline]
    pub fn assign<I: IntoIterator<Item = Interval<T>>>(&mut self, intervals: I) {
        self.clear();
        for interval in intervals {
            self.add(interval);
        }
    }

    #[inline]
    fn assert_valid(&self) {
        // the full scan is `O(n)`; only pay for it in tests, matching the teacher's own
        // `check_integrity` convention for this exact container.
        if cfg!(test) {
            debug_assert!(self.valid());
        }
    }

    /// The `Valid()` predicate from the container's invariants: every stored interval is
    /// non-empty and strictly precedes its successor with a genuine gap.
    fn valid(&self) -> bool {
        self.intervals.iter().all(|i| !i.is_empty())
            && self
                .intervals
                .iter()
                .zip(self.intervals.iter().skip(1))
                .all(|(a, b)| a.max() < b.min())
    }
}

impl<T: Copy> IntervalSet<T> {
    /// Returns a read-only, ascending-order iterator over the stored intervals.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.intervals.iter(),
        }
    }
}

impl<'a, T: Copy> IntoIterator for &'a IntervalSet<T> {
    type Item = Interval<T>;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord + Copy> Extend<Interval<T>> for IntervalSet<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, intervals: I) {
        for interval in intervals {
            self.add(interval);
        }
    }
}

impl<T: Ord + Copy> core::iter::FromIterator<Interval<T>> for IntervalSet<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(intervals: I) -> Self {
        let mut set = Self::new();
        set.extend(intervals);
        set
    }
}

impl<T: Ord + Copy> From<Interval<T>> for IntervalSet<T> {
    #[inline]
    fn from(interval: Interval<T>) -> Self {
        let mut set = Self::new();
        set.add(interval);
        set
    }
}

impl<T: Ord + Copy> From<core::ops::Range<T>> for IntervalSet<T> {
    #[inline]
    fn from(range: core::ops::Range<T>) -> Self {
        Self::from(Interval::new(range.start, range.end))
    }
}

impl<T: Ord + Copy> From<core::ops::Range<T>> for Interval<T> {
    #[inline]
    fn from(range: core::ops::Range<T>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for IntervalSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.intervals.iter()).finish()
    }
}

impl<T: Copy + fmt::Display> fmt::Display for IntervalSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{ ")?;
        for interval in self.intervals.iter() {
            write!(f, "{interval} ")?;
        }
        write!(f, "}}")
    }
}
