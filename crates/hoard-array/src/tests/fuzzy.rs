// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use hoard_core::{CapacityStrategy, GrowthConfig};

use crate::ArrayList;

#[derive(Debug, Clone)]
enum Op {
    Add(u16),
    AddAt(u16, usize),
    AddAll(Vec<u16>),
    RemoveAt(usize),
    SetAt(usize, u16),
    SetMaxCapacity(usize),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u16>().prop_map(Op::Add),
        2 => (any::<u16>(), 0usize..64).prop_map(|(v, i)| Op::AddAt(v, i)),
        1 => prop::collection::vec(any::<u16>(), 0..16).prop_map(Op::AddAll),
        2 => (0usize..64).prop_map(Op::RemoveAt),
        1 => (0usize..64, any::<u16>()).prop_map(|(i, v)| Op::SetAt(i, v)),
        1 => (0usize..64).prop_map(Op::SetMaxCapacity),
        1 => Just(Op::Clear),
    ]
}

fn capacity_strategy() -> impl Strategy<Value = CapacityStrategy> {
    prop_oneof![
        Just(CapacityStrategy::Strict),
        Just(CapacityStrategy::Half),
        Just(CapacityStrategy::Double),
    ]
}

proptest! {
    #[test]
    fn test_matches_vec_model_and_keeps_capacity_invariant(
        strategy in capacity_strategy(),
        min_extra in 0usize..8,
        ops in prop::collection::vec(op_strategy(), 0..128),
    ) {
        let config = GrowthConfig::new()
            .with_min_extra(min_extra)
            .with_strategy(strategy);
        let mut list = ArrayList::with_config(config).unwrap();
        let mut model: Vec<u16> = Vec::new();

        for op in ops {
            match op {
                Op::Add(v) => {
                    list.add(v).unwrap();
                    model.push(v);
                }
                Op::AddAt(v, i) => {
                    let result = list.add_at(v, i);
                    if i <= model.len() {
                        prop_assert!(result.is_ok());
                        model.insert(i, v);
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                Op::AddAll(values) => {
                    list.add_all(values.iter().copied()).unwrap();
                    model.extend(values);
                }
                Op::RemoveAt(i) => {
                    let expected = (i < model.len()).then(|| model.remove(i));
                    prop_assert_eq!(list.remove_at(i), expected);
                }
                Op::SetAt(i, v) => {
                    let result = list.set_at(i, v);
                    if i < model.len() {
                        prop_assert_eq!(result.ok(), Some(core::mem::replace(&mut model[i], v)));
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                Op::SetMaxCapacity(c) => {
                    list.set_max_capacity(c).unwrap();
                }
                Op::Clear => {
                    let drained: Vec<u16> = list.clear().collect();
                    prop_assert_eq!(drained, core::mem::take(&mut model));
                }
            }

            prop_assert!(list.len() <= list.capacity());
            prop_assert_eq!(list.as_slice(), model.as_slice());
        }
    }

    #[test]
    fn test_sort_yields_sorted_permutation(
        values in prop::collection::vec(any::<i32>(), 0..256),
        seed in any::<u64>(),
    ) {
        let mut list = ArrayList::new();
        list.add_all(values.iter().copied()).unwrap();

        let mut rng = SmallRng::seed_from_u64(seed);
        list.sort_range_with_rng(&mut rng, 0, values.len(), |a, b| a.cmp(b)).unwrap();

        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(list.as_slice(), expected.as_slice());
    }
}
