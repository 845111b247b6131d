// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered index diagnostics.
//!
//! Insert keys in ascending order (the worst case for an unbalanced tree), then print the
//! per-node layout a tree overlay would draw and a text dump.
//!
//! Run:
//! - `cargo run -p understory_demos --example ordered_index_diagnostics`

use understory_ordered_index::AvlTree;

fn main() {
    let mut tree: AvlTree<i64, ()> = AvlTree::new();
    for k in (1..=15).map(|k| k * 100) {
        tree.insert(k, ());
    }
    println!("len={} height={} root={:?}", tree.len(), tree.height(), tree.root_key());

    // Column = in-order position, row = depth
    for info in tree.node_infos() {
        println!(
            "col={:>2} row={} key={:>5} h={} b={:+}",
            info.order, info.depth, info.key, info.height, info.balance
        );
    }

    print!("{}", tree.dump());
    match tree.check_invariants() {
        Ok(()) => println!("invariants hold"),
        Err(e) => println!("broken: {e}"),
    }
}
