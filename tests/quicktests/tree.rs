use avl::Tree;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a hashset.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut HashSet<T>) -> bool
where
    T: std::hash::Hash + Eq + Clone + Ord,
{
    ops.iter().all(|op| {
        let agrees = match op {
            Op::Insert(x) => tree.insert(x.clone()) == set.insert(x.clone()),
            Op::Remove(x) => tree.remove(x) == set.take(x),
        };
        agrees && tree.is_valid()
    })
}

/// The worst case height of an AVL tree with `n` nodes.
fn max_avl_height(n: usize) -> f64 {
    1.44 * ((n + 2) as f64).log2()
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = HashSet::new();

        do_ops(&ops, &mut tree, &mut set)
            && tree.size() == set.len()
            && set.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn size_counts_distinct_values(xs: Vec<i32>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }
        let distinct: HashSet<_> = xs.iter().collect();

        tree.size() == distinct.len() && xs.iter().all(|x| !tree.insert(*x))
            && tree.size() == distinct.len()
    }
}

quickcheck::quickcheck! {
    fn inorder_is_sorted(xs: Vec<i32>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let values = tree.inorder();

        values.len() == tree.size() && values.windows(2).all(|w| w[0] < w[1])
    }
}

quickcheck::quickcheck! {
    fn traversals_have_size_values(xs: Vec<u8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let mut pre = tree.preorder();
        let mut post = tree.postorder();
        pre.sort_unstable();
        post.sort_unstable();

        pre == tree.inorder() && post == tree.inorder()
    }
}

quickcheck::quickcheck! {
    fn insert_then_remove_round_trips(xs: Vec<i16>, x: i16) -> bool {
        let mut tree: Tree<_> = xs.into_iter().collect();
        if tree.contains(&x) {
            return true;
        }
        let size = tree.size();

        tree.insert(x);
        tree.remove(&x) == Some(x) && tree.size() == size && tree.retrieve(&x).is_none()
    }
}

quickcheck::quickcheck! {
    fn height_stays_logarithmic(xs: Vec<u16>, deletes: Vec<u16>) -> bool {
        let mut tree: Tree<_> = xs.into_iter().collect();
        let fine_after_inserts = tree.height() as f64 <= max_avl_height(tree.size());
        for x in &deletes {
            tree.remove(x);
        }

        fine_after_inserts && tree.height() as f64 <= max_avl_height(tree.size())
    }
}

quickcheck::quickcheck! {
    fn replayed_inserts_are_equal(xs: Vec<i8>, extra: i8) -> bool {
        let a: Tree<_> = xs.iter().copied().collect();
        let b: Tree<_> = xs.iter().copied().collect();
        let mut superset = b.clone();
        let grew = superset.insert(extra);

        a.equals(&b) && b.equals(&a) && (!grew || !a.equals(&superset))
    }
}

quickcheck::quickcheck! {
    fn equals_matches_shape_of_same_values(xs: Vec<i8>) -> bool {
        // Both trees hold the same values, so only their shapes can tell them apart. Distinct
        // values make the preorder determine the shape.
        let a: Tree<_> = xs.iter().copied().collect();
        let b: Tree<_> = xs.iter().rev().copied().collect();

        a.size() == b.size() && a.equals(&b) == (a.preorder() == b.preorder())
    }
}

quickcheck::quickcheck! {
    fn min_max_match_inorder(xs: Vec<i32>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let values = tree.inorder();

        match (values.first(), values.last()) {
            (Some(first), Some(last)) => tree.min() == Ok(*first) && tree.max() == Ok(*last),
            _ => tree.min().is_err() && tree.max().is_err(),
        }
    }
}

#[test]
fn removing_from_ascending_tree_stays_valid() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut tree: Tree<_> = (1..=7).collect();
    assert_eq!(tree.remove(&1), Some(1));
    assert!(tree.is_valid());

    for x in 2..=7 {
        assert_eq!(tree.remove(&x), Some(x));
        assert!(tree.is_valid());
    }
    assert!(tree.is_empty());
}

#[test]
fn descending_inserts_stay_balanced() {
    let mut tree = Tree::new();
    for x in (0..1000).rev() {
        assert!(tree.insert(x));
    }

    assert!(tree.is_valid());
    assert!(tree.height() as f64 <= max_avl_height(tree.size()));
    assert_eq!(tree.min(), Ok(0));
    assert_eq!(tree.max(), Ok(999));
}
