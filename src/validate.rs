//! Structural self-check for [`Tree`]. This walks the whole tree, so it is only compiled for tests
//! or with the `validate` feature and is never called by the tree itself.

use std::fmt;

use log::warn;
use thiserror::Error;

use crate::compare::Compare;
use crate::node::Link;
use crate::tree::Tree;

/// Which child link was followed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The left child.
    Left,
    /// The right child.
    Right,
}

/// The path from the root to a node, as the sequence of child links followed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location(Vec<Side>);

impl Location {
    /// The links followed from the root. Empty for the root itself.
    pub fn steps(&self) -> &[Side] {
        &self.0
    }

    /// How far below the root the node is.
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("root")?;
        for side in &self.0 {
            match side {
                Side::Left => f.write_str("/left")?,
                Side::Right => f.write_str("/right")?,
            }
        }
        Ok(())
    }
}

/// The first broken invariant found by [`Tree::validate`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Violation {
    /// A node's element is on the wrong side of one of its ancestors.
    #[error("element at {location} is on the wrong side of an ancestor")]
    OutOfOrder {
        /// The offending node.
        location: Location,
    },
    /// A node's element is equal to one of its ancestors'.
    #[error("element at {location} is equal to an ancestor's")]
    Duplicate {
        /// The offending node.
        location: Location,
    },
    /// A node's stored height doesn't match the height of its subtree.
    #[error("node at {location} records height {recorded} but its subtree has height {actual}")]
    HeightMismatch {
        /// The offending node.
        location: Location,
        /// The height stored in the node.
        recorded: usize,
        /// The height of the subtree.
        actual: usize,
    },
    /// A node's subtrees differ in height by more than one.
    #[error("node at {location} has subtrees of height {left} and {right}")]
    Unbalanced {
        /// The offending node.
        location: Location,
        /// Height of the left subtree.
        left: usize,
        /// Height of the right subtree.
        right: usize,
    },
    /// The tracked length doesn't match the number of nodes.
    #[error("tree records {recorded} elements but holds {counted}")]
    SizeMismatch {
        /// The length the tree tracked.
        recorded: usize,
        /// The number of nodes actually reachable from the root.
        counted: usize,
    },
}

impl<T, C> Tree<T, C>
where
    C: Compare<T>,
{
    /// Checks the order, uniqueness, balance and size invariants, reporting the first one that
    /// doesn't hold. This visits every node.
    pub fn validate(&self) -> Result<(), Violation> {
        let result = check_tree(self);
        if let Err(violation) = &result {
            warn!("tree failed validation: {violation}");
        }
        result
    }

    /// Like [`validate`][Tree::validate] but only says whether the tree is valid.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

fn check_tree<T, C>(tree: &Tree<T, C>) -> Result<(), Violation>
where
    C: Compare<T>,
{
    let mut location = Location::default();
    let summary = check(&tree.root, None, None, &tree.comparator, &mut location)?;
    if summary.count != tree.len {
        return Err(Violation::SizeMismatch {
            recorded: tree.len,
            counted: summary.count,
        });
    }
    Ok(())
}

/// What a subtree looks like once it has been checked.
struct Summary {
    count: usize,
    height: usize,
}

/// Recursively checks the subtree at `link`. Every element in it must be strictly between
/// `lower` and `upper` (where present).
fn check<T, C>(
    link: &Link<T>,
    lower: Option<&T>,
    upper: Option<&T>,
    comparator: &C,
    location: &mut Location,
) -> Result<Summary, Violation>
where
    C: Compare<T>,
{
    let Some(n) = link else {
        return Ok(Summary {
            count: 0,
            height: 0,
        });
    };

    if let Some(lower) = lower {
        if !comparator.less(lower, &n.value) {
            return Err(misplaced(comparator.less(&n.value, lower), location));
        }
    }
    if let Some(upper) = upper {
        if !comparator.less(&n.value, upper) {
            return Err(misplaced(comparator.less(upper, &n.value), location));
        }
    }

    location.0.push(Side::Left);
    let left = check(&n.left, lower, Some(&n.value), comparator, location)?;
    location.0.pop();

    location.0.push(Side::Right);
    let right = check(&n.right, Some(&n.value), upper, comparator, location)?;
    location.0.pop();

    let height = left.height.max(right.height) + 1;
    if n.height != height {
        return Err(Violation::HeightMismatch {
            location: location.clone(),
            recorded: n.height,
            actual: height,
        });
    }
    if left.height.abs_diff(right.height) > 1 {
        return Err(Violation::Unbalanced {
            location: location.clone(),
            left: left.height,
            right: right.height,
        });
    }

    Ok(Summary {
        count: left.count + right.count + 1,
        height,
    })
}

fn misplaced(strictly: bool, location: &Location) -> Violation {
    let location = location.clone();
    if strictly {
        Violation::OutOfOrder { location }
    } else {
        Violation::Duplicate { location }
    }
}
