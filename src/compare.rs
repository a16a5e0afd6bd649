//! Comparator strategies. A [`Tree`][crate::Tree] never compares its elements through their own
//! ordering; every comparison goes through the [`Compare`] value it was built with.
//!
//! # Examples
//!
//! ```
//! use ctree::{Compare, Natural, Reversed};
//!
//! assert!(Natural.less(&1, &2));
//! assert!(Reversed.less(&2, &1));
//!
//! // Closures are comparators too.
//! let by_len = |a: &&str, b: &&str| a.len() < b.len();
//! assert!(by_len.less(&"ab", &"abc"));
//! assert!(by_len.equal(&"ab", &"cd"));
//! ```

/// A strict weak order over `T`.
///
/// Implementations must be irreflexive (`!less(a, a)`), asymmetric and transitive. A comparator
/// that breaks these rules leaves the tree's invariants undefined; this is not detected at runtime.
pub trait Compare<T: ?Sized> {
    /// Returns `true` if `a` is strictly ordered before `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Two elements are equal when neither is less than the other.
    fn equal(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Orders elements by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Orders elements by the reverse of their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reversed;

impl<T: Ord + ?Sized> Compare<T> for Reversed {
    fn less(&self, a: &T, b: &T) -> bool {
        b < a
    }
}
