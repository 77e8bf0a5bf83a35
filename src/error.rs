use thiserror::Error;

/// Failures reported by [`Tree`][crate::Tree] operations.
///
/// Duplicate inserts and lookup misses are not errors: they are reported as `false` and `None`
/// respectively.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AvlError {
    /// `min` or `max` was asked of a tree with no values. Check
    /// [`is_empty`][crate::Tree::is_empty] first.
    #[error("the tree is empty")]
    EmptyTree,
}
