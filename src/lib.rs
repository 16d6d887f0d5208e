// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! A generic, canonical set of half-open intervals `[min, max)` over any totally-ordered,
//! `Copy` domain.
//!
//! `IntervalSet<T>` always stores the minimal representation of the values it holds: every
//! stored [`Interval`] is non-empty, intervals are kept in ascending order by `min`, and no two
//! stored intervals are adjacent or overlapping. This makes the set a compact way to track things
//! like "which byte offsets of a stream have been received" or "which packet numbers have been
//! acknowledged" without paying for one entry per value.
//!
//! See [`IntervalSet`] for the main entry point.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![forbid(unsafe_code)]

#[cfg(any(feature = "alloc", feature = "std", test))]
extern crate alloc;

mod interval_set;

pub use interval_set::{Interval, IntervalSet, Iter};
