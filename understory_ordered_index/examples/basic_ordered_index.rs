// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory Ordered Index: insert, range query, remove, and inspect.

use understory_ordered_index::AvlTree;

fn main() {
    let mut tree: AvlTree<i64, &str> = AvlTree::new();
    for (k, p) in [(50, "e"), (25, "b"), (75, "g"), (10, "a"), (30, "c"), (60, "f"), (80, "h")] {
        tree.insert(k, p);
    }
    println!("root={:?} height={}", tree.root_key(), tree.height());

    // Query an inclusive window
    let hits: Vec<_> = tree.range(20, 65).collect();
    println!("range [20, 65]: {:?}", hits);

    // Remove the root; its in-order successor takes its place
    tree.remove(&50);
    println!("after removing 50: root={:?}", tree.root_key());
    print!("{}", tree.dump());
}
