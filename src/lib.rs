//! A Binary Search Tree (BST) that is balanced once, when it is built.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value
//! and will sometimes have child `Node`s. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! ## Balancing
//!
//! Trees in this crate are built from a `Vec` of values by repeatedly
//! splitting the sorted, deduplicated input at its middle, which bounds the
//! height at `O(lg N)` for `N` nodes. That balance is established at
//! construction time only - [`Tree::insert`] does no rebalancing, so a long
//! run of one-sided insertions degrades the tree back towards a list. Use
//! [`Tree::is_balanced`] to check where a tree currently stands.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod tree;


pub use error::TreeError;
pub use tree::{Node, Tree};
