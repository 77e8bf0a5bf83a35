//! Diagnostic rendering of a tree's shape.
//!
//! Each node is written as its value's [`Display`][fmt::Display] output followed by its cached
//! height, with its children on the following lines:
//!
//! ```text
//! 2 [h=3]
//! ├─ 1 [h=1]
//! └─ 3 [h=2]
//!    ├─ ∅
//!    └─ 4 [h=1]
//! ```
//!
//! The left child is always listed first. A missing child is drawn as `∅` when its sibling
//! exists, so the two sides stay distinguishable.

use std::fmt;

use crate::node::Node;
use crate::Tree;

impl<T, C> Tree<T, C>
where
    T: fmt::Display,
{
    /// Renders the shape of the tree for diagnostics. Same as the [`Display`][fmt::Display]
    /// output.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<T, C> fmt::Display for Tree<T, C>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => fmt_node(root, "", f),
            None => f.write_str("∅"),
        }
    }
}

fn fmt_node<T>(node: &Node<T>, tab: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: fmt::Display,
{
    write!(f, "{} [h={}]", node.value, node.height)?;
    if node.degree() == 0 {
        return Ok(());
    }

    for (child, is_last) in [(node.left(), false), (node.right(), true)] {
        let (branch, child_tab) = if is_last {
            ("└─", format!("{tab}   "))
        } else {
            ("├─", format!("{tab}│  "))
        };
        write!(f, "\n{tab}{branch} ")?;
        match child {
            Some(child) => fmt_node(child, &child_tab, f)?,
            None => f.write_str("∅")?,
        }
    }
    Ok(())
}
