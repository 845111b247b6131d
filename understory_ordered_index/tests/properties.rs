// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Model-based property tests: every operation is mirrored into a `BTreeMap`.

use std::collections::BTreeMap;

use proptest::prelude::*;
use understory_ordered_index::AvlTree;

#[derive(Clone, Debug)]
enum Op {
    Insert(i32, u16),
    Remove(i32),
    PopFirst,
    RemoveBelow(i32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (-200..200_i32, any::<u16>()).prop_map(|(k, p)| Op::Insert(k, p)),
        3 => (-200..200_i32).prop_map(Op::Remove),
        1 => Just(Op::PopFirst),
        1 => (-200..200_i32).prop_map(Op::RemoveBelow),
    ]
}

fn apply(tree: &mut AvlTree<i32, u16>, model: &mut BTreeMap<i32, u16>, op: &Op) {
    match *op {
        Op::Insert(k, p) => {
            assert_eq!(tree.insert(k, p), model.insert(k, p));
        }
        Op::Remove(k) => {
            assert_eq!(tree.remove(&k), model.remove(&k));
        }
        Op::PopFirst => {
            assert_eq!(tree.pop_first(), model.pop_first());
        }
        Op::RemoveBelow(t) => {
            let kept = model.split_off(&t);
            let evicted: Vec<_> = std::mem::replace(model, kept).into_iter().collect();
            assert_eq!(tree.remove_below(t), evicted);
        }
    }
}

proptest! {
    #[test]
    fn invariants_hold_after_every_operation(ops in prop::collection::vec(op(), 0..300)) {
        let mut tree = AvlTree::new();
        let mut model = BTreeMap::new();
        for op in &ops {
            apply(&mut tree, &mut model, op);
            prop_assert_eq!(tree.check_invariants(), Ok(()));
            prop_assert_eq!(tree.len(), model.len());
        }
        let ordered: Vec<_> = tree.iter().map(|(k, p)| (*k, *p)).collect();
        let expected: Vec<_> = model.iter().map(|(k, p)| (*k, *p)).collect();
        prop_assert_eq!(ordered, expected);
    }

    #[test]
    fn range_matches_model(
        keys in prop::collection::vec(-500..500_i32, 0..200),
        lo in -600..600_i32,
        span in 0..400_i32,
    ) {
        let tree: AvlTree<i32, i32> = keys.iter().map(|k| (*k, k * 2)).collect();
        let model: BTreeMap<i32, i32> = keys.iter().map(|k| (*k, k * 2)).collect();
        let hi = lo + span;

        let got: Vec<_> = tree.range(lo, hi).map(|(k, p)| (*k, *p)).collect();
        let want: Vec<_> = model.range(lo..=hi).map(|(k, p)| (*k, *p)).collect();
        prop_assert!(got.len() <= tree.len());
        prop_assert_eq!(&got, &want);

        let mut unordered: Vec<_> = tree.range_preorder(lo, hi).into_iter().map(|(k, p)| (*k, *p)).collect();
        unordered.sort_unstable();
        prop_assert_eq!(unordered, want);
    }

    #[test]
    fn duplicate_insert_keeps_shape(keys in prop::collection::vec(0..100_i32, 1..60), pick in any::<prop::sample::Index>()) {
        let mut tree: AvlTree<i32, u8> = keys.iter().map(|k| (*k, 0)).collect();
        let before = tree.node_infos();
        let key = keys[pick.index(keys.len())];
        prop_assert_eq!(tree.insert(key, 1), Some(0));
        prop_assert_eq!(tree.node_infos(), before);
        prop_assert_eq!(tree.get(&key), Some(&1));
    }

    #[test]
    fn remove_then_insert_round_trips(keys in prop::collection::vec(0..100_i32, 1..60), pick in any::<prop::sample::Index>()) {
        let mut tree: AvlTree<i32, i32> = keys.iter().map(|k| (*k, *k)).collect();
        let len = tree.len();
        let key = keys[pick.index(keys.len())];
        prop_assert_eq!(tree.remove(&key), Some(key));
        tree.insert(key, -1);
        prop_assert_eq!(tree.len(), len);
        prop_assert_eq!(tree.get(&key), Some(&-1));
        prop_assert_eq!(tree.check_invariants(), Ok(()));
    }

    #[test]
    fn traversals_cover_every_entry(keys in prop::collection::vec(any::<i16>(), 0..120)) {
        let tree: AvlTree<i16, ()> = keys.iter().map(|k| (*k, ())).collect();
        let mut pre: Vec<_> = tree.iter_preorder().map(|(k, _)| *k).collect();
        let mut post: Vec<_> = tree.iter_postorder().map(|(k, _)| *k).collect();
        let ordered: Vec<_> = tree.iter().map(|(k, _)| *k).collect();
        prop_assert!(ordered.windows(2).all(|w| w[0] < w[1]));
        pre.sort_unstable();
        post.sort_unstable();
        prop_assert_eq!(&pre, &ordered);
        prop_assert_eq!(&post, &ordered);
        prop_assert_eq!(tree.iter_preorder().next().map(|(k, _)| *k), tree.root_key());
        prop_assert_eq!(tree.iter_postorder().last().map(|(k, _)| *k), tree.root_key());
    }
}
