//! The [`Tree`] handle: the only public way to build and query an AVL tree.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use log::{debug, trace};

use crate::compare::{Compare, Natural};
use crate::error::AvlError;
use crate::iter::Iter;
use crate::node::{self, Link, Node};

/// A self-balancing Binary Search Tree (specifically, an AVL tree) of unique values.
///
/// The tree owns every value stored in it. Values are ordered by the [`Compare`] strategy `C`
/// given at construction; two values comparing equal are never both stored.
pub struct Tree<T, C = Natural> {
    root: Link<T>,
    size: usize,
    cmp: C,
}

/// How many nodes of a tree have zero, one, and two children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NodeCounts {
    /// Nodes without children.
    pub leaves: usize,
    /// Nodes with exactly one child.
    pub one_child: usize,
    /// Nodes with both children.
    pub two_children: usize,
}

impl NodeCounts {
    /// The number of nodes counted. For a whole tree this equals its [`size`][Tree::size].
    pub fn total(&self) -> usize {
        self.leaves + self.one_child + self.two_children
    }
}

impl<T> Default for Tree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Generate a new, empty `Tree` ordered by `T`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> Tree<T, C>
where
    C: Compare<T>,
{
    /// Generate a new, empty `Tree` ordered by `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// assert!(tree.insert("abc"));
    ///
    /// // Same length, so it counts as a duplicate.
    /// assert!(!tree.insert("xyz"));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: None,
            size: 0,
            cmp,
        }
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of values in the tree.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The number of values in the tree. Same as [`size`][Self::size].
    pub fn len(&self) -> usize {
        self.size
    }

    /// The number of levels in the tree. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Drops every value in the tree, leaving it empty.
    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    /// Inserts `value` into the tree. Returns `false`, dropping `value` and leaving the tree
    /// unchanged, if a value comparing equal is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let (root, inserted) = node::insert(self.root.take(), value, &self.cmp);
        self.root = Some(root);

        if inserted {
            self.size += 1;
        }
        trace!("insert: inserted={} size={}", inserted, self.size);

        inserted
    }

    /// Removes the value comparing equal to `key` and hands it back. If the tree does not
    /// contain such a value, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.remove(&2), None);
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let (root, removed) = node::remove(self.root.take(), key, &self.cmp);
        self.root = root;

        if removed.is_some() {
            self.size -= 1;
        }
        trace!("remove: found={} size={}", removed.is_some(), self.size);

        removed
    }

    /// Potentially finds the stored value comparing equal to `key`. If no such value exists,
    /// `None` is returned.
    pub fn get(&self, key: &T) -> Option<&T> {
        let mut current = self.root.as_deref();
        while let Some(n) = current {
            current = match self.cmp.compare(key, &n.value) {
                Ordering::Less => n.left(),
                Ordering::Equal => return Some(&n.value),
                Ordering::Greater => n.right(),
            };
        }
        None
    }

    /// Returns `true` if a value comparing equal to `key` is stored in the tree.
    pub fn contains(&self, key: &T) -> bool {
        self.get(key).is_some()
    }

    /// Returns a copy of the stored value comparing equal to `key`, or `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert("a".to_string());
    ///
    /// assert_eq!(tree.retrieve(&"a".to_string()), Some("a".to_string()));
    /// assert_eq!(tree.retrieve(&"b".to_string()), None);
    /// ```
    pub fn retrieve(&self, key: &T) -> Option<T>
    where
        T: Clone,
    {
        self.get(key).cloned()
    }

    /// Returns a copy of the smallest value in the tree.
    ///
    /// # Errors
    ///
    /// [`AvlError::EmptyTree`] if there are no values.
    pub fn min(&self) -> Result<T, AvlError>
    where
        T: Clone,
    {
        let mut current = self.root.as_deref().ok_or(AvlError::EmptyTree)?;
        while let Some(left) = current.left() {
            current = left;
        }
        Ok(current.value.clone())
    }

    /// Returns a copy of the largest value in the tree.
    ///
    /// # Errors
    ///
    /// [`AvlError::EmptyTree`] if there are no values.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::{AvlError, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.max(), Err(AvlError::EmptyTree));
    ///
    /// tree.extend([4, 9, 1]);
    /// assert_eq!(tree.max(), Ok(9));
    /// ```
    pub fn max(&self) -> Result<T, AvlError>
    where
        T: Clone,
    {
        let mut current = self.root.as_deref().ok_or(AvlError::EmptyTree)?;
        while let Some(right) = current.right() {
            current = right;
        }
        Ok(current.value.clone())
    }

    /// Copies every value out in sorted order (left subtree, node, right subtree).
    pub fn inorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        fn visit<T: Clone>(link: &Link<T>, out: &mut Vec<T>) {
            if let Some(n) = link {
                visit(&n.left, out);
                out.push(n.value.clone());
                visit(&n.right, out);
            }
        }

        let mut values = Vec::with_capacity(self.size);
        visit(&self.root, &mut values);
        values
    }

    /// Copies every value out, each node before its subtrees.
    pub fn preorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        fn visit<T: Clone>(link: &Link<T>, out: &mut Vec<T>) {
            if let Some(n) = link {
                out.push(n.value.clone());
                visit(&n.left, out);
                visit(&n.right, out);
            }
        }

        let mut values = Vec::with_capacity(self.size);
        visit(&self.root, &mut values);
        values
    }

    /// Copies every value out, each node after its subtrees.
    pub fn postorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        fn visit<T: Clone>(link: &Link<T>, out: &mut Vec<T>) {
            if let Some(n) = link {
                visit(&n.left, out);
                visit(&n.right, out);
                out.push(n.value.clone());
            }
        }

        let mut values = Vec::with_capacity(self.size);
        visit(&self.root, &mut values);
        values
    }

    /// Iterates over borrowed values in sorted order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.size)
    }

    /// The number of nodes without children.
    pub fn leaf_count(&self) -> usize {
        self.node_counts().leaves
    }

    /// The number of nodes with exactly one child.
    pub fn one_child_count(&self) -> usize {
        self.node_counts().one_child
    }

    /// The number of nodes with two children.
    pub fn two_child_count(&self) -> usize {
        self.node_counts().two_children
    }

    /// Tallies nodes by how many children they have in a single pass.
    pub fn node_counts(&self) -> NodeCounts {
        fn tally<T>(link: &Link<T>, counts: &mut NodeCounts) {
            if let Some(n) = link {
                match n.degree() {
                    0 => counts.leaves += 1,
                    1 => counts.one_child += 1,
                    _ => counts.two_children += 1,
                }
                tally(&n.left, counts);
                tally(&n.right, counts);
            }
        }

        let mut counts = NodeCounts::default();
        tally(&self.root, &mut counts);
        counts
    }

    /// Returns `true` if the heights of every node's subtrees differ by at most one.
    pub fn is_balanced(&self) -> bool {
        fn balanced<T>(link: &Link<T>) -> bool {
            match link {
                None => true,
                Some(n) if n.height == 1 => true,
                Some(n) => {
                    n.balance_factor().abs() <= 1 && balanced(&n.left) && balanced(&n.right)
                }
            }
        }

        balanced(&self.root)
    }

    /// Returns `true` if the tree is a valid AVL tree: every value lies strictly between the
    /// bounds inherited from its ancestors, every node is balanced and every cached height is
    /// correct.
    pub fn is_valid(&self) -> bool {
        self.valid_subtree(&self.root, None, None)
    }

    fn valid_subtree(&self, link: &Link<T>, lower: Option<&T>, upper: Option<&T>) -> bool {
        let n = match link {
            Some(n) => n,
            None => return true,
        };

        if let Some(lower) = lower {
            if self.cmp.compare(lower, &n.value) != Ordering::Less {
                debug!("is_valid: node not above its lower bound");
                return false;
            }
        }
        if let Some(upper) = upper {
            if self.cmp.compare(&n.value, upper) != Ordering::Less {
                debug!("is_valid: node not below its upper bound");
                return false;
            }
        }
        if n.balance_factor().abs() > 1 {
            debug!("is_valid: balance factor {} out of range", n.balance_factor());
            return false;
        }
        if n.height != node::height(&n.left).max(node::height(&n.right)) + 1 {
            debug!("is_valid: cached height {} is stale", n.height);
            return false;
        }

        self.valid_subtree(&n.left, lower, Some(&n.value))
            && self.valid_subtree(&n.right, Some(&n.value), upper)
    }

    /// Returns `true` if `other` has the same shape as this tree and every pair of
    /// corresponding values compares equal under this tree's comparator.
    ///
    /// This is structural equality, not set equality, and `==` follows it: two trees holding
    /// the same values in different shapes are not equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let a: Tree<_> = vec![2, 1, 3].into_iter().collect();
    /// let b: Tree<_> = vec![2, 3, 1].into_iter().collect();
    /// // Rotations settle ascending inserts into the same shape.
    /// let c: Tree<_> = vec![1, 2, 3].into_iter().collect();
    /// let d: Tree<_> = vec![1, 2, 3, 4].into_iter().collect();
    ///
    /// assert!(a.equals(&b));
    /// assert!(a.equals(&c));
    /// assert!(!a.equals(&d));
    /// ```
    pub fn equals<D>(&self, other: &Tree<T, D>) -> bool {
        fn same<T, C: Compare<T>>(cmp: &C, a: &Link<T>, b: &Link<T>) -> bool {
            match (a, b) {
                (None, None) => true,
                (Some(a), Some(b)) => {
                    cmp.compare(&a.value, &b.value) == Ordering::Equal
                        && same(cmp, &a.left, &b.left)
                        && same(cmp, &a.right, &b.right)
                }
                _ => false,
            }
        }

        self.size == other.size && same(&self.cmp, &self.root, &other.root)
    }
}

impl<T, C> Tree<T, C> {
    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T, C> Clone for Tree<T, C>
where
    T: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            size: self.size,
            cmp: self.cmp.clone(),
        }
    }
}

impl<T, C> PartialEq for Tree<T, C>
where
    C: Compare<T>,
{
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("size", &self.size)
            .field("root", &self.root())
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

impl<'a, T, C> IntoIterator for &'a Tree<T, C>
where
    C: Compare<T>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
