//! Ordering strategies a [`Tree`][crate::Tree] can be built with.
//!
//! The tree never looks inside the values it stores. Every ordering decision goes through a
//! [`Compare`] implementation chosen when the tree is constructed and kept for its lifetime.

use std::cmp::Ordering;

/// A strict total order over `T`.
///
/// Implementations must be consistent for the lifetime of the tree that holds them: comparing
/// the same two values must always give the same answer. Any `Fn(&T, &T) -> Ordering` closure
/// is a `Compare<T>`.
///
/// # Examples
///
/// ```
/// use avl::Tree;
///
/// // Largest value first.
/// let mut tree = Tree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
/// tree.extend([1, 3, 2]);
///
/// assert_eq!(tree.inorder(), vec![3, 2, 1]);
/// ```
pub trait Compare<T: ?Sized> {
    /// Returns how `a` orders relative to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders values by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T> Compare<T> for Natural
where
    T: Ord + ?Sized,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
