// SPDX-License-Identifier: MPL-2.0

//! Generators for test and benchmark trees.
//!
//! Both generators write the arena directly instead of going through
//! [`BinaryTree::insert`], so building a tree is O(n) even when the tree is a
//! 10^5-deep chain. Node `i` always holds the value `i`.

use crate::tree::{BinaryTree, Node};

/// A complete binary tree with `size` nodes in heap layout: node `i` has its
/// children at indices `2i + 1` and `2i + 2`.
pub fn complete_tree(size: usize) -> BinaryTree<u64> {
    let mut nodes = Vec::with_capacity(size);
    for i in 0..size {
        let left = 2 * i + 1;
        let right = 2 * i + 2;
        nodes.push(Node {
            value: i as u64,
            left: (left < size).then_some(left),
            right: (right < size).then_some(right),
        });
    }

    BinaryTree {
        nodes,
        root: (size > 0).then_some(0),
    }
}

/// A left-skewed chain of `depth` nodes: every node's only child is its left
/// child.
pub fn left_chain(depth: usize) -> BinaryTree<u64> {
    let mut nodes = Vec::with_capacity(depth);
    for i in 0..depth {
        nodes.push(Node {
            value: i as u64,
            left: (i + 1 < depth).then_some(i + 1),
            right: None,
        });
    }

    BinaryTree {
        nodes,
        root: (depth > 0).then_some(0),
    }
}
