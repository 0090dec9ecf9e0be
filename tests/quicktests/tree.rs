use rebuild_bst::{Error, Tree};

use std::collections::{BTreeSet, HashSet};

use quickcheck_macros::quickcheck;

/// The values a tree built from `xs` should hold, in order.
fn sorted_distinct(xs: &[i8]) -> Vec<i8> {
    xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
}

/// The depth of a balanced tree holding `len` values.
fn balanced_depth(len: usize) -> isize {
    match len {
        0 => -1,
        n => (usize::BITS - 1 - n.leading_zeros()) as isize,
    }
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = Tree::new(xs.clone());

    xs.iter().all(|x| tree.find(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::new(xs.clone());
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn built_in_order_is_sorted_and_distinct(xs: Vec<i8>) -> bool {
    let tree = Tree::new(xs.clone());
    let expected = sorted_distinct(&xs);

    tree.len() == expected.len() && tree.in_order().copied().eq(expected)
}

#[quickcheck]
fn built_tree_has_minimal_depth(xs: Vec<i8>) -> bool {
    let tree = Tree::new(xs);

    tree.is_balanced() && tree.depth() == balanced_depth(tree.len())
}

#[quickcheck]
fn insert_then_find(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = Tree::new(xs.clone());
    let was_present = xs.contains(&x);

    let first = tree.insert(x);
    let second = tree.insert(x);

    first.is_ok() != was_present
        && second == Err(Error::DuplicateValue(x))
        && tree.contains(&x)
        && xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new(xs.clone());
    for delete in &deletes {
        tree.delete(delete);
    }

    let still_present: Vec<_> = xs.iter().filter(|x| !deletes.contains(x)).collect();

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
        && tree.in_order().copied().eq(sorted_distinct(
            &still_present.into_iter().copied().collect::<Vec<_>>(),
        ))
}

#[quickcheck]
fn rebalance_keeps_values(xs: Vec<i8>, inserts: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new(xs);
    tree.extend(inserts);
    for delete in &deletes {
        tree.delete(delete);
    }
    let before: Vec<i8> = tree.in_order().copied().collect();

    tree.rebalance();

    tree.in_order().copied().eq(before.iter().copied())
        && tree.len() == before.len()
        && tree.depth() == balanced_depth(before.len())
}

#[quickcheck]
fn traversals_visit_every_value_once(xs: Vec<i8>) -> bool {
    let tree = Tree::new(xs.clone());
    let expected = sorted_distinct(&xs);

    let mut orders = [
        tree.level_order().copied().collect::<Vec<_>>(),
        tree.pre_order().copied().collect(),
        tree.post_order().copied().collect(),
    ];
    for order in &mut orders {
        order.sort_unstable();
    }

    orders.iter().all(|order| *order == expected)
}

#[test]
fn concrete_scenarios() {
    let tree = Tree::new(vec![5, 1, 4, 2, 3]);
    assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    assert_eq!(tree.root().map(|n| *n.value()), Some(3));
    assert_eq!(tree.depth(), 2);
    assert!(tree.is_balanced());

    let mut tree = Tree::new(vec![1, 2, 3, 4, 5, 6, 7]);
    tree.delete(&4);
    assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 2, 3, 5, 6, 7]);

    let tree = Tree::new(vec![1, 2, 3]);
    assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), [2, 1, 3]);

    assert_eq!(Tree::<i32>::new(vec![]).depth(), -1);
    assert_eq!(Tree::new(vec![42]).depth(), 0);
}
