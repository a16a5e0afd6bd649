//! This crate exposes an ordered set built on a self-balancing Binary Search Tree (BST) whose
//! ordering is supplied by the caller.
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
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). Inserting sorted data into a naive BST makes its
//! height `O(N)`. The [`Tree`] here is an AVL tree: after every insert and remove it rotates nodes
//! so that no node's subtrees differ in height by more than one, which keeps the height
//! `O(lg N)` whatever order the elements arrive in.
//!
//! ## Comparators
//!
//! "Less than" above means whatever the tree's [`Compare`] strategy says. [`Natural`] uses the
//! element's [`Ord`], [`Reversed`] flips it, and any `Fn(&T, &T) -> bool` closure works too.
//!
//! ```
//! use ctree::Tree;
//!
//! let mut tree = Tree::with_comparator(|a: &(u32, char), b: &(u32, char)| a.0 < b.0);
//! tree.insert((2, 'b'));
//! tree.insert((1, 'a'));
//!
//! // Only the first field takes part in comparisons.
//! assert!(tree.contains(&(2, 'z')));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod balance;
mod compare;
mod node;
mod tree;
mod util;
#[cfg(any(test, feature = "validate"))]
mod validate;

#[cfg(test)]
mod test;

pub use compare::{Compare, Natural, Reversed};
pub use tree::Tree;
#[cfg(any(test, feature = "validate"))]
pub use validate::{Location, Side, Violation};
