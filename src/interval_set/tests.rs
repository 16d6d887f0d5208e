// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use super::*;
use alloc::collections::BTreeSet;
use bolero::{check, generator::*};
use core::iter::FromIterator;

type Bound = u8;

#[derive(Clone, Debug, TypeGenerator)]
struct Op {
    min: Bound,
    max: Bound,
    insert: bool,
}

/// Models the same sequence of operations as a `BTreeSet<Bound>` containing every individual
/// value, which is semantically equivalent to (if far less efficient than) an `IntervalSet`.
#[derive(Debug, Default)]
struct Oracle {
    values: BTreeSet<Bound>,
}

impl Oracle {
    fn apply(&mut self, op: &Op) {
        let (min, max) = (op.min.min(op.max), op.min.max(op.max));
        if op.insert {
            self.values.extend(min..max);
        } else {
            for v in min..max {
                self.values.remove(&v);
            }
        }
    }

    fn as_intervals(&self) -> Vec<(Bound, Bound)> {
        let mut out = vec![];
        let mut iter = self.values.iter().copied();
        let Some(mut start) = iter.next() else {
            return out;
        };
        let mut end = start + 1;
        for v in iter {
            if v == end {
                end = v + 1;
            } else {
                out.push((start, end));
                start = v;
                end = v + 1;
            }
        }
        out.push((start, end));
        out
    }
}

fn as_pairs(set: &IntervalSet<Bound>) -> Vec<(Bound, Bound)> {
    set.iter().map(|i| (i.min(), i.max())).collect()
}

fn build(ops: &[Op]) -> (Oracle, IntervalSet<Bound>) {
    let mut oracle = Oracle::default();
    let mut subject = IntervalSet::new();

    for op in ops {
        oracle.apply(op);
        let (min, max) = (op.min.min(op.max), op.min.max(op.max));
        if op.insert {
            subject.add(Interval::new(min, max));
        } else {
            subject.difference(&IntervalSet::from(Interval::new(min, max)));
        }
        assert!(subject.valid(), "set must stay canonical after every op");
    }

    assert_eq!(
        oracle.as_intervals(),
        as_pairs(&subject),
        "subject must match the brute-force oracle"
    );

    (oracle, subject)
}

#[test]
#[cfg_attr(miri, ignore)]
fn add_and_difference_match_oracle() {
    check!()
        .with_type::<Vec<Op>>()
        .for_each(|ops| {
            build(ops);
        });
}

#[test]
#[cfg_attr(miri, ignore)]
fn union_matches_oracle() {
    check!()
        .with_type::<(Vec<Op>, Vec<Op>)>()
        .for_each(|(a_ops, b_ops)| {
            let (mut oracle_a, mut a) = build(a_ops);
            let (oracle_b, b) = build(b_ops);

            oracle_a.values.extend(&oracle_b.values);
            a.union(&b);

            assert!(a.valid());
            assert_eq!(oracle_a.as_intervals(), as_pairs(&a));
        });
}

#[test]
#[cfg_attr(miri, ignore)]
fn intersection_matches_oracle() {
    check!()
        .with_type::<(Vec<Op>, Vec<Op>)>()
        .for_each(|(a_ops, b_ops)| {
            let (mut oracle_a, mut a) = build(a_ops);
            let (oracle_b, b) = build(b_ops);

            oracle_a.values = oracle_a
                .values
                .intersection(&oracle_b.values)
                .copied()
                .collect();
            a.intersection(&b);

            assert!(a.valid());
            assert_eq!(oracle_a.as_intervals(), as_pairs(&a));
            assert_eq!(a.intersects(&b), !a.is_empty());
        });
}

#[test]
#[cfg_attr(miri, ignore)]
fn difference_matches_oracle() {
    check!()
        .with_type::<(Vec<Op>, Vec<Op>)>()
        .for_each(|(a_ops, b_ops)| {
            let (mut oracle_a, mut a) = build(a_ops);
            let (oracle_b, b) = build(b_ops);

            oracle_a.values = oracle_a
                .values
                .difference(&oracle_b.values)
                .copied()
                .collect();
            a.difference(&b);

            assert!(a.valid());
            assert_eq!(oracle_a.as_intervals(), as_pairs(&a));
        });
}

#[test]
#[cfg_attr(miri, ignore)]
fn contains_value_matches_oracle() {
    check!()
        .with_type::<(Vec<Op>, Bound)>()
        .for_each(|(ops, value)| {
            let (oracle, subject) = build(ops);

            assert_eq!(oracle.values.contains(value), subject.contains_value(*value));
            assert_eq!(subject.find(*value).is_some(), subject.contains_value(*value));
        });
}

#[test]
fn difference_identities() {
    let a = IntervalSet::from_iter([Interval::new(0u32, 10), Interval::new(20, 30)]);
    let empty = IntervalSet::new();

    let mut a_minus_a = a.clone();
    a_minus_a.difference(&a);
    assert!(a_minus_a.is_empty());

    let mut a_minus_empty = a.clone();
    a_minus_empty.difference(&empty);
    assert_eq!(a_minus_empty, a);

    let mut empty_minus_a = empty.clone();
    empty_minus_a.difference(&a);
    assert!(empty_minus_a.is_empty());
}

#[test]
fn complement_involution() {
    let mut a = IntervalSet::from_iter([Interval::new(10u32, 20), Interval::new(30, 40)]);
    let original = a.clone();

    a.complement(0, 50);
    assert_eq!(as_pairs(&a), vec![(0, 10), (20, 30), (40, 50)]);

    a.complement(0, 50);
    assert_eq!(a, original);
}

#[test]
fn optimized_append_matches_add() {
    let mut plain = IntervalSet::new();
    plain.add(Interval::new(0u32, 10));
    plain.add(Interval::new(10, 20));

    let mut fast = IntervalSet::new();
    fast.add(Interval::new(0u32, 10));
    fast.add_optimized_for_append(Interval::new(10, 20));

    assert_eq!(plain, fast);
}

// the six worked scenarios
#[test]
fn scenario_1_add_merges_three_intervals() {
    let mut s = IntervalSet::new();
    s.add(Interval::new(10u32, 20));
    s.add(Interval::new(30, 40));
    s.add(Interval::new(15, 35));

    assert_eq!(as_pairs(&s), vec![(10, 40)]);
    assert_eq!(s.len(), 1);
    assert!(s.contains_interval(&Interval::new(10, 40)));
    assert!(!s.contains_interval(&Interval::new(10, 41)));
}

#[test]
fn scenario_2_difference_trims_low_end() {
    let mut s = IntervalSet::new();
    s.add(Interval::new(10u32, 20));
    s.add(Interval::new(30, 40));
    s.add(Interval::new(15, 35));

    s.difference(&IntervalSet::from(Interval::new(10, 20)));
    assert_eq!(as_pairs(&s), vec![(20, 40)]);
}

#[test]
fn scenario_3_find_and_bounds() {
    let s: IntervalSet<u32> =
        IntervalSet::from_iter([Interval::new(0, 5), Interval::new(10, 20), Interval::new(50, 60)]);

    assert_eq!(s.find(15), Some(Interval::new(10, 20)));
    assert_eq!(s.find(30), None);
    assert_eq!(s.lower_bound(20), Some(Interval::new(50, 60)));
    assert_eq!(s.upper_bound(10), Some(Interval::new(50, 60)));
}

#[test]
fn scenario_4_intersection() {
    let mut a: IntervalSet<u32> = IntervalSet::from_iter([Interval::new(0, 10), Interval::new(20, 30)]);
    let b = IntervalSet::from(Interval::new(5, 25));

    a.intersection(&b);
    assert_eq!(as_pairs(&a), vec![(5, 10), (20, 25)]);
}

#[test]
fn scenario_5_difference_over_set() {
    let mut a = IntervalSet::from(Interval::new(0u32, 100));
    let b: IntervalSet<u32> =
        IntervalSet::from_iter([Interval::new(10, 20), Interval::new(30, 40), Interval::new(90, 110)]);

    a.difference(&b);
    assert_eq!(as_pairs(&a), vec![(0, 10), (20, 30), (40, 90)]);
}

#[test]
fn scenario_6_complement() {
    let mut a: IntervalSet<u32> = IntervalSet::from_iter([Interval::new(10, 20), Interval::new(30, 40)]);
    a.complement(0, 50);
    assert_eq!(as_pairs(&a), vec![(0, 10), (20, 30), (40, 50)]);
}

#[test]
fn empty_interval_is_never_contained() {
    let a = IntervalSet::from(Interval::new(0u32, 10));
    assert!(!a.contains_interval(&Interval::new(5, 5)));

    let empty_set = IntervalSet::<u32>::new();
    assert!(!a.contains_set(&empty_set));
}

#[test]
fn reverse_iteration_matches_forward_reversed() {
    let s: IntervalSet<u32> =
        IntervalSet::from_iter([Interval::new(0, 5), Interval::new(10, 20), Interval::new(50, 60)]);

    let forward: Vec<_> = s.iter().collect();
    let mut backward: Vec<_> = s.iter().rev().collect();
    backward.reverse();

    assert_eq!(forward, backward);
}
