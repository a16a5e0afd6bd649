use ctree::Tree;

use std::collections::{BTreeSet, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same elements in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    ops.iter().all(|op| match op {
        Op::Insert(x) => bst.insert(x.clone()) == set.insert(x.clone()),
        Op::Remove(x) => bst.remove(x) == set.remove(x),
    })
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && tree.len() == set.len()
        && (i8::MIN..=i8::MAX).all(|x| tree.contains(&x) == set.contains(&x))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn len_counts_distinct(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let distinct: HashSet<_> = xs.into_iter().collect();

    tree.len() == distinct.len()
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn round_trip_empties(xs: Vec<u32>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for x in &xs {
        tree.remove(x);
    }

    tree.is_empty() && tree.height() == 0
}

#[test]
fn concrete_example() {
    let mut tree = Tree::new();
    for x in [5, 1, 8, 3] {
        tree.insert(x);
    }

    assert!(tree.contains(&8));
    assert!(tree.remove(&8));
    assert!(!tree.contains(&8));
    assert_eq!(tree.len(), 3);

    assert!(!tree.remove(&8));
    assert_eq!(tree.len(), 3);
}

#[test]
fn sorted_input_is_not_a_linked_list() {
    let tree: Tree<_> = (0..100_000).collect();

    assert_eq!(tree.len(), 100_000);
    // lg(100,000) is about 16.6; a degenerate tree would be 100,000 tall.
    assert!(tree.height() <= 24, "height {}", tree.height());
    assert!((0..100_000).all(|x| tree.contains(&x)));
}
