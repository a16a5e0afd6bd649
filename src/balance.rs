//! The AVL balancing engine. Every primitive here takes ownership of a subtree root and hands back
//! the new root of the same subtree with its in-order sequence unchanged.
//!
//! See <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for terminology.

use log::trace;

use crate::node::Node;

/// Rotate `old_root` to the right. This moves the left child up vertically and `old_root` down
/// vertically. Used to rebalance the tree when the left child is too tall.
///
/// ## Panics
///
/// When called on a node without a left child.
///
/// # Diagram
///
/// ```text
///       old_root              new_root
///        /     \              /     \
///   new_root    z   rotate -> x    old_root
///    /  \                           /  \
///   x    y                         y    z
/// ```
pub(crate) fn rotate_right<T>(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
    let mut new_root = old_root.left.take().expect("Rotate right => left child");
    old_root.left = new_root.right.take();
    old_root.fix_height();

    new_root.right = Some(old_root);
    new_root.fix_height();
    new_root
}

/// Mirror image of [`rotate_right`]: the right child moves up and becomes the subtree root.
///
/// ## Panics
///
/// When called on a node without a right child.
pub(crate) fn rotate_left<T>(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
    let mut new_root = old_root.right.take().expect("Rotate left => right child");
    old_root.right = new_root.left.take();
    old_root.fix_height();

    new_root.left = Some(old_root);
    new_root.fix_height();
    new_root
}

/// Fixes a left child that leans right by first rotating it left, then rotating `root` right.
pub(crate) fn rotate_left_right<T>(mut root: Box<Node<T>>) -> Box<Node<T>> {
    let left = root.left.take().expect("Rotate left-right => left child");
    root.left = Some(rotate_left(left));
    rotate_right(root)
}

/// Fixes a right child that leans left by first rotating it right, then rotating `root` left.
pub(crate) fn rotate_right_left<T>(mut root: Box<Node<T>>) -> Box<Node<T>> {
    let right = root.right.take().expect("Rotate right-left => right child");
    root.right = Some(rotate_right(right));
    rotate_left(root)
}

/// Recomputes the height of `root` and, if its children differ in height by two, rotates so they
/// differ by at most one. Both children must already be balanced, which holds for every node on
/// the path of a single insert or remove when rebalancing bottom-up.
pub(crate) fn rebalance<T>(mut root: Box<Node<T>>) -> Box<Node<T>> {
    root.fix_height();
    let balanced = match root.balance_factor() {
        -2 => {
            let leans_right = root.left.as_ref().map_or(false, |l| l.balance_factor() > 0);
            if leans_right {
                trace!("left-right rotation at height {}", root.height);
                rotate_left_right(root)
            } else {
                trace!("right rotation at height {}", root.height);
                rotate_right(root)
            }
        }
        2 => {
            let leans_left = root.right.as_ref().map_or(false, |r| r.balance_factor() < 0);
            if leans_left {
                trace!("right-left rotation at height {}", root.height);
                rotate_right_left(root)
            } else {
                trace!("left rotation at height {}", root.height);
                rotate_left(root)
            }
        }
        _ => root,
    };

    // In debug builds, after balancing, assert that we've restored/maintained the AVL invariant.
    debug_assert!(balanced.balance_factor().abs() <= 1);
    balanced
}
