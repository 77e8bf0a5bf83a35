//! This crate exposes an AVL tree: a Binary Search Tree that keeps itself balanced after every
//! insertion and deletion.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! ## AVL trees
//!
//! On top of that, an AVL tree caches the height of every `Node` and requires the heights of
//! each `Node`'s two subtrees to differ by at most one. Whenever an insert or delete breaks that
//! rule, the `Node`s on the path back up to the root are rotated until it holds again. This
//! keeps the height of the tree, and so the cost of every lookup, insert, and delete, at
//! `O(lg N)`.
//!
//! # Examples
//!
//! ```
//! use avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.retrieve(&1), None);
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.retrieve(&1), Some(1));
//!
//! // Values are unique, a second insert is rejected.
//! assert!(!tree.insert(1));
//!
//! // Deleting a value hands it back.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert!(tree.is_empty());
//!
//! // Ascending inserts would degrade a plain BST into a list. Here they stay balanced.
//! tree.extend(1..=7);
//! assert_eq!(tree.height(), 3);
//! assert!(tree.is_valid());
//! assert_eq!(tree.preorder(), [4, 2, 1, 3, 6, 5, 7]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod compare;
mod error;
mod iter;
mod node;
mod render;
mod tree;


pub use compare::{Compare, Natural};
pub use error::AvlError;
pub use iter::Iter;
pub use tree::{NodeCounts, Tree};
