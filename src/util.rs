use crate::node::{Link, Node};

/// The outcome of removing a value from a subtree.
pub(crate) enum Removal<T> {
    /// The value wasn't found so nothing was removed. The subtree is handed back untouched and
    /// doesn't need rebalancing.
    NotFound(Box<Node<T>>),
    /// A node was removed. This is the new, already rebalanced, root of the subtree.
    Removed(Link<T>),
}
