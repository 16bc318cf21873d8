// SPDX-License-Identifier: MPL-2.0

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Structural equality comparison for binary trees.
//!
//! The [`tree`] module provides an arena-backed binary tree addressed by bit
//! paths. The [`eq`] module provides three comparators over pairs of trees:
//! a recursive reference implementation, a four-cursor iterative variant
//! with documented partial coverage, and a complete stack-safe iterative
//! variant that backs `BinaryTree`'s `PartialEq`.

pub mod eq;
#[cfg(feature = "test-util")]
#[cfg_attr(docsrs, doc(cfg(feature = "test-util")))]
pub mod test_util;
pub mod tree;
