//! The nodes of an AVL tree and the recursive algorithms that mutate them.
//!
//! Every mutating function here takes ownership of a subtree and hands back the (possibly
//! rotated) subtree that should take its place. Callers always store the returned subtree in
//! the slot they took the original from.

use std::cmp::Ordering;
use std::fmt;

use log::trace;

use crate::compare::Compare;

/// An owned, possibly empty subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("height", &self.height)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

/// The height of a possibly empty subtree. Empty subtrees have a height of 0.
pub(crate) fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
            height: 1,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    pub(crate) fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// Height of the left subtree minus height of the right subtree. Positive values mean the
    /// node leans left.
    pub(crate) fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// How many children this node has.
    pub(crate) fn degree(&self) -> usize {
        self.left.is_some() as usize + self.right.is_some() as usize
    }
}

/// Rotate `node` to the left. This moves the right child up vertically and `node` down
/// vertically. Must only be called when there _is_ a right child.
///
/// ## Panics
///
/// When called on a node without a right child.
///
/// # Diagram
///
/// ```text
///    node                      new_root
///   /    \                     /      \
///  x   new_root   rotate ->  node      z
///       /  \                 /  \
///      y    z               x    y
/// ```
pub(crate) fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut new_root = node.right.take().expect("Rotate left => right child");
    node.right = new_root.left.take();
    node.fix_height();

    new_root.left = Some(node);
    new_root.fix_height();
    new_root
}

/// Rotate `node` to the right. This moves the left child up vertically and `node` down
/// vertically. Must only be called when there _is_ a left child.
///
/// ## Panics
///
/// When called on a node without a left child.
///
/// # Diagram
///
/// ```text
///        node              new_root
///       /    \             /     \
///   new_root  z  rotate ->  x     node
///    /  \                         /  \
///   x    y                       y    z
/// ```
pub(crate) fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut new_root = node.left.take().expect("Rotate right => left child");
    node.left = new_root.right.take();
    node.fix_height();

    new_root.right = Some(node);
    new_root.fix_height();
    new_root
}

/// Restores the AVL invariant at `node` after one of its subtrees grew or shrank by a level.
/// Returns the root of the rebalanced subtree, which is not necessarily `node`.
///
/// See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
pub(crate) fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.fix_height();

    let balance = node.balance_factor();
    let left_balance = node.left().map(Node::balance_factor);
    let right_balance = node.right().map(Node::balance_factor);

    let node = match (left_balance, right_balance) {
        (Some(l), _) if balance > 1 && l >= 0 => {
            trace!("rebalance: left-left, rotating right");
            rotate_right(node)
        }
        (_, Some(r)) if balance < -1 && r <= 0 => {
            trace!("rebalance: right-right, rotating left");
            rotate_left(node)
        }
        (Some(_), _) if balance > 1 => {
            trace!("rebalance: left-right, double rotation");
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        }
        (_, Some(_)) if balance < -1 => {
            trace!("rebalance: right-left, double rotation");
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        }
        _ => node,
    };

    // In debug builds, assert that we've restored/maintained the AVL invariant.
    if cfg!(debug_assertions) {
        let left_height = height(&node.left);
        let right_height = height(&node.right);
        assert_eq!(node.height, left_height.max(right_height) + 1);
        assert!(left_height.abs_diff(right_height) <= 1);
    }
    node
}

/// Inserts `value` into the subtree rooted at `link`. Returns the new subtree root and whether
/// the value was inserted. A value comparing equal to one already present is dropped and the
/// subtree is handed back untouched.
pub(crate) fn insert<T, C>(link: Link<T>, value: T, cmp: &C) -> (Box<Node<T>>, bool)
where
    C: Compare<T>,
{
    let mut node = match link {
        Some(node) => node,
        None => return (Node::new_boxed(value), true),
    };

    let inserted = match cmp.compare(&value, &node.value) {
        Ordering::Less => {
            let (left, inserted) = insert(node.left.take(), value, cmp);
            node.left = Some(left);
            inserted
        }
        Ordering::Equal => false,
        Ordering::Greater => {
            let (right, inserted) = insert(node.right.take(), value, cmp);
            node.right = Some(right);
            inserted
        }
    };

    if inserted {
        (rebalance(node), true)
    } else {
        (node, false)
    }
}

/// Removes the value comparing equal to `key` from the subtree rooted at `link`. Returns the
/// new subtree root and the removed value, if there was one.
pub(crate) fn remove<T, C>(link: Link<T>, key: &T, cmp: &C) -> (Link<T>, Option<T>)
where
    C: Compare<T>,
{
    let mut node = match link {
        Some(node) => node,
        None => return (None, None),
    };

    match cmp.compare(key, &node.value) {
        Ordering::Less => {
            let (left, removed) = remove(node.left.take(), key, cmp);
            node.left = left;
            rebalance_if_removed(node, removed)
        }
        Ordering::Greater => {
            let (right, removed) = remove(node.right.take(), key, cmp);
            node.right = right;
            rebalance_if_removed(node, removed)
        }
        Ordering::Equal => {
            let Node {
                value, left, right, ..
            } = *node;

            let replacement = match (left, right) {
                (None, None) => None,
                (None, Some(child)) | (Some(child), None) => Some(child),
                // With two children we promote this node's predecessor. That is, the largest
                // node in its left subtree. If the left child has no right child it is the
                // predecessor and keeps its own left subtree.
                (Some(left), Some(right)) => {
                    let (rest, mut predecessor) = remove_largest(left);
                    predecessor.left = rest;
                    predecessor.right = Some(right);
                    Some(rebalance(predecessor))
                }
            };

            (replacement, Some(value))
        }
    }
}

fn rebalance_if_removed<T>(node: Box<Node<T>>, removed: Option<T>) -> (Link<T>, Option<T>) {
    match removed {
        Some(value) => (Some(rebalance(node)), Some(value)),
        None => (Some(node), None),
    }
}

/// Detaches the largest node in the subtree by recursing to the right until there is no right
/// child. Returns what remains of the subtree and the detached node, whose own children have
/// been cleared so it can be spliced in elsewhere.
fn remove_largest<T>(mut node: Box<Node<T>>) -> (Link<T>, Box<Node<T>>) {
    match node.right.take() {
        None => {
            // The largest node's left subtree moves up to take its place.
            let rest = node.left.take();
            node.height = 1;
            (rest, node)
        }
        Some(right) => {
            let (rest, largest) = remove_largest(right);
            node.right = rest;
            (Some(rebalance(node)), largest)
        }
    }
}
