//! An ordered set backed by an AVL tree whose ordering comes from an injected comparator.
//!
//! # Examples
//!
//! ```
//! use ctree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Inserting an element that's already present does nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Same for removing an element that isn't there.
//! assert!(tree.remove(&1));
//! assert!(!tree.remove(&1));
//! assert!(tree.is_empty());
//! ```

use std::fmt;

use log::debug;

use crate::balance::rebalance;
use crate::compare::{Compare, Natural};
use crate::node::{self, Link, Node};
use crate::util::Removal;

/// A self-balancing Binary Search Tree (specifically, an AVL tree) holding a set of elements.
///
/// Elements are only ever compared through `C`. Two elements the comparator considers equal
/// (neither is less than the other) are the same element as far as the tree is concerned.
///
/// The tree isn't synchronized; share it across threads behind a lock.
#[derive(Clone)]
pub struct Tree<T, C = Natural> {
    pub(crate) root: Link<T>,
    /// Number of live nodes, maintained on every insert and remove.
    pub(crate) len: usize,
    pub(crate) comparator: C,
}

impl<T, C> Default for Tree<T, C>
where
    C: Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Generates a new, empty `Tree` ordered by `T`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> Tree<T, C> {
    /// Generates a new, empty `Tree` that orders its elements with `comparator`.
    ///
    /// The comparator must be a strict weak order: irreflexive, asymmetric and transitive. If it
    /// isn't, the tree's behaviour is unspecified (but memory safe).
    ///
    /// # Examples
    ///
    /// ```
    /// use ctree::Tree;
    ///
    /// let mut tree = Tree::with_comparator(|a: &String, b: &String| a.len() < b.len());
    /// tree.insert("one".to_string());
    ///
    /// // "two" has the same length as "one" so it's considered the same element.
    /// assert!(tree.contains(&"two".to_string()));
    /// assert!(!tree.insert("two".to_string()));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            len: 0,
            comparator,
        }
    }

    /// The number of elements in the tree. This is tracked on every mutation, not counted.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels in the tree. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// The comparator this tree was built with.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Removes every element from the tree.
    pub fn clear(&mut self) {
        debug!("clearing tree of {} elements", self.len);
        self.root = None;
        self.len = 0;
    }
}

impl<T, C> Tree<T, C>
where
    C: Compare<T>,
{
    /// Adds `value` to the tree. Returns `true` if it wasn't already present.
    ///
    /// If an equal element is already stored, the tree is left untouched and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use ctree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in [5, 1, 8, 3] {
    ///     tree.insert(x);
    /// }
    ///
    /// assert_eq!(tree.len(), 4);
    /// assert!(!tree.insert(8));
    /// assert_eq!(tree.len(), 4);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = insert_into(&mut self.root, value, &self.comparator);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes the element equal to `value` from the tree. Returns `true` if there was one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ctree::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 1, 8, 3].into_iter().collect();
    ///
    /// assert!(tree.remove(&8));
    /// assert!(!tree.contains(&8));
    /// assert_eq!(tree.len(), 3);
    ///
    /// // It's already gone.
    /// assert!(!tree.remove(&8));
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        let removed = remove_from(&mut self.root, value, &self.comparator);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Returns `true` if the tree holds an element equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ctree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        let mut current = self.root.as_deref();
        while let Some(n) = current {
            current = if self.comparator.less(value, &n.value) {
                n.left.as_deref()
            } else if self.comparator.less(&n.value, value) {
                n.right.as_deref()
            } else {
                return true;
            };
        }
        false
    }
}

impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

impl<T, C> Extend<T> for Tree<T, C>
where
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Inserts `value` into the subtree at `link`, rebalancing every node on the way back up.
/// Returns `false` without touching anything if an equal element is already present.
fn insert_into<T, C>(link: &mut Link<T>, value: T, comparator: &C) -> bool
where
    C: Compare<T>,
{
    let inserted = match link {
        None => {
            *link = Some(Node::new_boxed(value));
            return true;
        }
        Some(n) => {
            if comparator.less(&value, &n.value) {
                insert_into(&mut n.left, value, comparator)
            } else if comparator.less(&n.value, &value) {
                insert_into(&mut n.right, value, comparator)
            } else {
                false
            }
        }
    };

    if inserted {
        *link = link.take().map(rebalance);
    }
    inserted
}

/// Removes the element equal to `value` from the subtree at `link`. Returns `true` if it was
/// found.
fn remove_from<T, C>(link: &mut Link<T>, value: &T, comparator: &C) -> bool
where
    C: Compare<T>,
{
    let Some(root) = link.take() else {
        return false;
    };

    match remove_node(root, value, comparator) {
        Removal::NotFound(root) => {
            *link = Some(root);
            false
        }
        Removal::Removed(new_root) => {
            *link = new_root;
            true
        }
    }
}

fn remove_node<T, C>(mut n: Box<Node<T>>, value: &T, comparator: &C) -> Removal<T>
where
    C: Compare<T>,
{
    if comparator.less(value, &n.value) {
        let Some(left) = n.left.take() else {
            return Removal::NotFound(n);
        };
        match remove_node(left, value, comparator) {
            Removal::NotFound(left) => {
                n.left = Some(left);
                Removal::NotFound(n)
            }
            Removal::Removed(left) => {
                n.left = left;
                Removal::Removed(Some(rebalance(n)))
            }
        }
    } else if comparator.less(&n.value, value) {
        let Some(right) = n.right.take() else {
            return Removal::NotFound(n);
        };
        match remove_node(right, value, comparator) {
            Removal::NotFound(right) => {
                n.right = Some(right);
                Removal::NotFound(n)
            }
            Removal::Removed(right) => {
                n.right = right;
                Removal::Removed(Some(rebalance(n)))
            }
        }
    } else {
        Removal::Removed(splice_out(n))
    }
}

/// Removes `n` from its subtree and returns what should take its place.
///
/// With at most one child, that child takes its place. With two children, `n` takes on the
/// element of its in-order successor and the successor's node is spliced out of the right subtree
/// instead.
fn splice_out<T>(mut n: Box<Node<T>>) -> Link<T> {
    match (n.left.take(), n.right.take()) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(child),
        (left, Some(right)) => {
            let (new_right, successor) = remove_smallest(right);
            n.value = successor;
            n.left = left;
            n.right = new_right;
            Some(rebalance(n))
        }
    }
}

/// Returns a new subtree without the smallest node and that node's element.
fn remove_smallest<T>(mut n: Box<Node<T>>) -> (Link<T>, T) {
    match n.left.take() {
        // The smallest node has no left child so its right child takes its place.
        None => {
            let Node { value, right, .. } = *n;
            (right, value)
        }
        Some(left) => {
            let (new_left, smallest) = remove_smallest(left);
            n.left = new_left;
            (Some(rebalance(n)), smallest)
        }
    }
}
