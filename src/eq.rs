// SPDX-License-Identifier: MPL-2.0

//! Structural equality of binary trees.
//!
//! Two trees are equal iff they have identical shape and corresponding node
//! values compare equal. Three comparators implement this contract:
//!
//! - [`recursive_eq`]: the reference implementation. Depth-first recursion,
//!   call-stack depth proportional to the height of the taller tree.
//! - [`spine_eq`]: an iterative comparator whose auxiliary state is four
//!   cursors. Stack-safe, but it only inspects part of the tree; see its
//!   documentation before relying on it.
//! - [`deep_eq`]: an iterative comparator driven by an explicit stack of
//!   node-index pairs. Stack-safe and complete; this is what
//!   `BinaryTree`'s [`PartialEq`] uses.
//!
//! All three are pure predicates: they never mutate their inputs, hold no
//! state across calls, and have no error channel. The value type supplies
//! equality through [`PartialEq`], which the comparators treat as pure and
//! total.

use crate::tree::BinaryTree;

/// Checks whether two binary trees are structurally equal, recursively.
///
/// Two absent subtrees are equal; an absent subtree never equals a present
/// one; two present subtrees are equal iff their values compare equal, their
/// left subtrees are equal, and their right subtrees are equal, evaluated in
/// that order with a short-circuit on the first mismatch.
///
/// Call-stack depth grows with the height of the taller tree, so this
/// comparator can exhaust the host stack on pathologically tall trees. Use
/// [`deep_eq`] for trees of unbounded height.
pub fn recursive_eq<V: PartialEq>(a: &BinaryTree<V>, b: &BinaryTree<V>) -> bool {
    subtree_eq(a, a.root, b, b.root)
}

fn subtree_eq<V: PartialEq>(
    a: &BinaryTree<V>,
    x: Option<usize>,
    b: &BinaryTree<V>,
    y: Option<usize>,
) -> bool {
    match (x, y) {
        (None, None) => true,
        (Some(i), Some(j)) => {
            let (n, m) = (&a.nodes[i], &b.nodes[j]);
            n.value == m.value
                && subtree_eq(a, n.left, b, m.left)
                && subtree_eq(a, n.right, b, m.right)
        }
        _ => false,
    }
}

/// Checks whether two binary trees agree along the right spine and the left
/// chains hanging off it, using four cursors and no recursion.
///
/// An outer cursor pair walks the right spine of both trees in lockstep; for
/// each spine node, an inner cursor pair walks the chain of left children.
/// The first shape asymmetry or value mismatch observed returns `false`; the
/// comparison succeeds when both outer cursors run off the spine together.
///
/// # Coverage
///
/// This traversal never descends through a `right` link that hangs off a
/// left-chain node, so nodes reachable only through such links are not
/// compared at all. Trees that differ only in those subtrees compare equal
/// here even though [`recursive_eq`] and [`deep_eq`] report them unequal.
/// Prefer [`deep_eq`] when a complete verdict is required.
pub fn spine_eq<V: PartialEq>(a: &BinaryTree<V>, b: &BinaryTree<V>) -> bool {
    let (mut ra, mut rb) = (a.root, b.root);
    let (mut la, mut lb) = (ra, rb);
    loop {
        loop {
            match (la, lb) {
                (None, None) => break,
                (Some(i), Some(j)) => {
                    if a.nodes[i].value != b.nodes[j].value {
                        return false;
                    }
                    la = a.nodes[i].left;
                    lb = b.nodes[j].left;
                }
                _ => return false,
            }
        }
        match (ra, rb) {
            (None, None) => return true,
            (Some(i), Some(j)) => {
                ra = a.nodes[i].right;
                rb = b.nodes[j].right;
            }
            // The inner loop already rejected a lone spine cursor.
            _ => return false,
        }
        la = ra;
        lb = rb;
    }
}

/// Checks whether two binary trees are structurally equal, iteratively.
///
/// Maintains an explicit stack of node-index pairs: pop a pair, compare the
/// values, reject on any shape asymmetry among the children, push the child
/// pairs that are present on both sides. Every node pair is visited exactly
/// once, auxiliary memory is proportional to the pending frontier, and the
/// call stack stays flat regardless of tree height.
pub fn deep_eq<V: PartialEq>(a: &BinaryTree<V>, b: &BinaryTree<V>) -> bool {
    let mut pending = match (a.root, b.root) {
        (None, None) => return true,
        (Some(i), Some(j)) => vec![(i, j)],
        _ => return false,
    };

    while let Some((i, j)) = pending.pop() {
        let (n, m) = (&a.nodes[i], &b.nodes[j]);
        if n.value != m.value {
            return false;
        }
        match (n.left, m.left) {
            (None, None) => {}
            (Some(l), Some(r)) => pending.push((l, r)),
            _ => return false,
        }
        match (n.right, m.right) {
            (None, None) => {}
            (Some(l), Some(r)) => pending.push((l, r)),
            _ => return false,
        }
    }

    true
}

impl<V: PartialEq> PartialEq for BinaryTree<V> {
    fn eq(&self, other: &Self) -> bool {
        deep_eq(self, other)
    }
}

impl<V: Eq> Eq for BinaryTree<V> {}
