// SPDX-License-Identifier: MPL-2.0

//! Arena-backed binary trees.
//!
//! ## Properties:
//! - Binary tree: nodes have either 0, 1, or 2 child nodes.
//! - Arena storage: nodes live in a flat vector and refer to their children
//!   by index, so each node has exactly one owner and dropping a tree never
//!   recurses, no matter how tall the tree is.
//! - Read-only comparison: the comparators in [`crate::eq`] take shared
//!   references and never modify a tree.
//!
//! ## Creation
//! Use [`BinaryTree::default`] to create an empty tree, then grow it with
//! [`BinaryTree::insert`]. A value must be placed at the root before any
//! other node becomes reachable.
//!
//! ## Addressing
//! Nodes are addressed by a [`Path`], a bit slice in which `false` descends
//! into the left child and `true` into the right child. The empty path
//! addresses the root.
//!
//! ## Example
//! ```
//! use treecmp::tree::BinaryTree;
//! use bitvec::{bits, prelude::Lsb0};
//!
//! let mut tree = BinaryTree::default();
//! tree.insert(bits!(), 1).unwrap();
//! tree.insert(bits!(0), 2).unwrap();
//! tree.insert(bits!(1), 3).unwrap();
//! assert_eq!(tree.get(bits!(0)), Some(&2));
//! ```

use bitvec::slice::BitSlice;

/// Errors triggered by binary tree operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BinaryTreeError<V> {
    /// Error when inserting at a node that already holds a value.
    #[error("node already contains a value")]
    Occupied(V),
    /// Error when the node at the end of a path has no parent to hang off.
    #[error("unreachable node in the tree")]
    Unreachable(V),
}

/// Used to indicate a traversal path on the binary tree.
///
/// A `false` bit selects the left child, a `true` bit the right child.
pub type Path = BitSlice;

/// A node of a binary tree: a value and two optional child links.
#[derive(Debug)]
pub struct Node<V> {
    pub(crate) value: V,
    pub(crate) left: Option<usize>,
    pub(crate) right: Option<usize>,
}

impl<V> Node<V> {
    pub(crate) fn leaf(value: V) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// A binary tree over values of type `V`.
///
/// An absent root represents the empty tree.
#[derive(Debug)]
pub struct BinaryTree<V> {
    pub(crate) nodes: Vec<Node<V>>,
    pub(crate) root: Option<usize>,
}

impl<V> BinaryTree<V> {
    /// Inserts the value at the node addressed by the path.
    ///
    /// The tree is traversed from the root along `path`. If the addressed
    /// node already holds a value, or is unreachable because an ancestor is
    /// missing, an error wrapping the value is returned and the tree is left
    /// unchanged. Otherwise a new leaf holding the value is linked in.
    ///
    /// # Returns
    /// - `Ok(())` when the value is inserted at the end of the path.
    /// - `Err(Occupied(value))` when the tree already contains a value at
    ///   the end of the path.
    /// - `Err(Unreachable(value))` when the end of the path is unreachable.
    pub fn insert(&mut self, path: &Path, value: V) -> Result<(), BinaryTreeError<V>> {
        let next = self.nodes.len();
        let mut link = &mut self.root;
        for bit in path.iter() {
            match *link {
                None => return Err(BinaryTreeError::Unreachable(value)),
                Some(idx) => {
                    let node = &mut self.nodes[idx];
                    link = if !bit { &mut node.left } else { &mut node.right };
                }
            }
        }

        if link.is_some() {
            return Err(BinaryTreeError::Occupied(value));
        }
        *link = Some(next);
        self.nodes.push(Node::leaf(value));

        Ok(())
    }

    /// Gets a reference to the value at the node addressed by the path.
    ///
    /// Returns [`None`] if the path runs past a leaf boundary or addresses a
    /// node that holds no value.
    pub fn get(&self, path: &Path) -> Option<&V> {
        let mut link = self.root;
        for bit in path {
            let node = &self.nodes[link?];
            link = if !bit { node.left } else { node.right };
        }

        Some(&self.nodes[link?].value)
    }

    /// Gets a mutable reference to the value at the node addressed by the
    /// path, or [`None`] if the node is unreachable or nonexistent.
    pub fn get_mut(&mut self, path: &Path) -> Option<&mut V> {
        let mut link = self.root;
        for bit in path {
            let node = &self.nodes[link?];
            link = if !bit { node.left } else { node.right };
        }

        Some(&mut self.nodes[link?].value)
    }

    /// Number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

impl<V> Default for BinaryTree<V> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }
}

#[cfg(feature = "test-util")]
impl<V: core::fmt::Display> core::fmt::Display for Node<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} L: {:?} R: {:?}", self.value, self.left, self.right)
    }
}

#[cfg(feature = "test-util")]
impl<V: core::fmt::Display> core::fmt::Display for BinaryTree<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "--- Begin Tree ---")?;
        for node in self.nodes.iter() {
            writeln!(f, "{node}")?;
        }
        write!(f, "--- End Tree ---")
    }
}

#[cfg(test)]
mod tests {
    use core::fmt::Debug;

    use assert_matches::assert_matches;
    use bitvec::{bits, order::Lsb0, vec::BitVec, view::BitView};
    use num_traits::Num;

    use crate::tree::{BinaryTree, BinaryTreeError};

    #[test]
    fn empty_tree() {
        let mut tree = BinaryTree::<u32>::default();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.get(bits!()).is_none());
        assert!(tree.get_mut(bits!()).is_none());
    }

    #[test]
    fn insert_occupied() {
        let mut tree = BinaryTree::default();
        tree.insert(bits!(), 1u32).unwrap();
        assert_matches!(tree.insert(bits!(), 2), Err(BinaryTreeError::Occupied(2)));
        assert_eq!(tree.get(bits!()), Some(&1));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn insert_unreachable() {
        let mut tree = BinaryTree::default();
        assert_matches!(
            tree.insert(bits!(0), 1u32),
            Err(BinaryTreeError::Unreachable(1))
        );
        tree.insert(bits!(), 1).unwrap();
        assert_matches!(
            tree.insert(bits!(1, 0), 2),
            Err(BinaryTreeError::Unreachable(2))
        );
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn get_mut_updates_value() {
        let mut tree = BinaryTree::default();
        tree.insert(bits!(), 1u32).unwrap();
        tree.insert(bits!(1), 3).unwrap();
        *tree.get_mut(bits!(1)).unwrap() = 4;
        assert_eq!(tree.get(bits!(1)), Some(&4));
    }

    #[test]
    fn check_full_tree() {
        for depth in 0..=8 {
            let paths = level_order_paths(depth);
            let mut tree = BinaryTree::<u32>::default();
            fill_tree(&mut tree, &paths).unwrap();
            check_tree(&tree, &paths);
        }
    }

    /// All paths of length at most `depth`, shortest first, so inserting in
    /// order always finds the parent already in place.
    fn level_order_paths(depth: usize) -> Vec<BitVec> {
        let mut paths = Vec::new();
        for len in 0..=depth {
            for j in 0..1usize << len {
                paths.push(j.view_bits::<Lsb0>()[..len].to_bitvec());
            }
        }

        paths
    }

    fn fill_tree<T: Num + Copy>(
        tree: &mut BinaryTree<T>,
        paths: &[BitVec],
    ) -> Result<(), BinaryTreeError<T>> {
        let mut ctr = T::zero();
        for path in paths {
            tree.insert(path, ctr)?;
            ctr = ctr + T::one();
        }

        Ok(())
    }

    fn check_tree<T: Num + Debug>(tree: &BinaryTree<T>, paths: &[BitVec]) {
        assert_eq!(tree.len(), paths.len());
        let mut ctr = T::zero();
        for path in paths {
            let value = tree.get(path).unwrap();
            assert_eq!(*value, ctr, "path: {}", path);
            ctr = ctr + T::one();
        }
    }
}
