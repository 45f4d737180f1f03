use bintree::node::{node, Node};
use bintree::traversal::{by_inorder, by_posorder, by_preorder, count, write_inorder};
use bintree::{height, insert, search, BinaryTree, Link, Order};

use std::collections::HashSet;

use crate::Op;

fn build(xs: &[i8]) -> Link {
    xs.iter().fold(None, |root, x| Some(insert(root, node(i32::from(*x)))))
}

/// Applies a set of operations to a tree and a sorted vector of everything inserted.
/// Every lookup and traversal is checked against the vector as it goes.
fn do_ops(ops: &[Op], tree: &mut BinaryTree, model: &mut Vec<i32>) -> bool {
    for op in ops {
        match *op {
            Op::Insert(k) => {
                let k = i32::from(k);
                tree.insert(k);
                let pos = model.partition_point(|x| *x <= k);
                model.insert(pos, k);
            }
            Op::Search(k) => {
                let k = i32::from(k);
                let found = tree.search(k).map(Node::key);
                let expected = model.binary_search(&k).ok().map(|_| k);
                if found != expected {
                    return false;
                }
            }
            Op::Inorder => {
                if tree.keys(Order::In) != *model {
                    return false;
                }
            }
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations(ops: Vec<Op>) -> bool {
    let mut tree = BinaryTree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model) && tree.len() == model.len()
}

#[quickcheck]
fn inorder_is_sorted(xs: Vec<i8>) -> bool {
    let root = build(&xs);
    let keys = Order::In.keys(root.as_deref());

    keys.windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn inorder_writes_sorted_lines(xs: Vec<i8>) -> bool {
    let root = build(&xs);
    let mut out: Vec<u8> = Vec::new();
    if write_inorder(root.as_deref(), &mut out).is_err() {
        return false;
    }

    let mut expected: Vec<i32> = xs.iter().map(|x| i32::from(*x)).collect();
    expected.sort_unstable();
    let expected: String = expected.iter().map(|x| format!("{}\n", x)).collect();

    out == expected.into_bytes()
}

#[quickcheck]
fn counts_agree(xs: Vec<i8>) -> bool {
    let root = build(&xs);
    let root = root.as_deref();

    count(root, by_preorder) == xs.len()
        && count(root, by_inorder) == xs.len()
        && count(root, by_posorder) == xs.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let root = build(&xs);

    xs.iter().all(|x| {
        let x = i32::from(*x);
        search(x, root.as_deref()).map(Node::key) == Some(x)
    })
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let root = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| search(i32::from(*x), root.as_deref()).is_none())
}

#[quickcheck]
fn outside_range_is_absent(xs: Vec<i8>) -> bool {
    let root = build(&xs);
    let root = root.as_deref();

    // Every inserted key fits in an `i8`, so these are below the minimum and above the maximum.
    search(i32::from(i8::MIN) - 1, root).is_none()
        && search(i32::from(i8::MAX) + 1, root).is_none()
}

#[quickcheck]
fn height_bounds(xs: Vec<i8>) -> bool {
    let h = height(build(&xs).as_deref());

    if xs.is_empty() {
        h == 0
    } else {
        1 <= h && h <= xs.len()
    }
}

#[quickcheck]
fn sorted_input_is_a_chain(xs: Vec<i8>) -> bool {
    let mut xs = xs;
    xs.sort_unstable();

    height(build(&xs).as_deref()) == xs.len()
}

#[test]
fn round_trip() {
    let root = build(&[5, 3, 8, 1, 4, 7, 9]);

    for key in &[5, 3, 8, 1, 4, 7, 9] {
        assert_eq!(search(*key, root.as_deref()).map(Node::key), Some(*key));
    }
    assert!(search(100, root.as_deref()).is_none());
}

#[test]
fn known_heights() {
    assert_eq!(height(build(&[1, 2, 3, 4, 5]).as_deref()), 5);
    assert_eq!(height(build(&[4, 2, 6, 1, 3, 5, 7]).as_deref()), 3);
}

#[test]
fn empty_tree() {
    let mut out: Vec<u8> = Vec::new();
    write_inorder(None, &mut out).unwrap();

    assert!(out.is_empty());
    assert_eq!(count(None, by_preorder), 0);
    assert_eq!(height(None), 0);
}

#[test]
fn sorted_insertion_builds_a_deep_chain() {
    let n = 25_000;
    let tree: BinaryTree = (0..n).collect();

    assert_eq!(tree.height(), n as usize);
    assert_eq!(tree.len(), n as usize);
    assert_eq!(tree.count(Order::Post), n as usize);
    assert!(tree.contains(n - 1));
    assert!(!tree.contains(n));
    assert_eq!(tree.keys(Order::In), (0..n).collect::<Vec<_>>());
    drop(tree);
}

/// Grows a chain of `n` keys without rescanning it on every insert: each fresh node becomes the
/// parent of the chain built so far, so `insert` takes one step per key.
fn chain(n: i32, ascending: bool) -> Link {
    let mut keys: Vec<i32> = (0..n).collect();
    if ascending {
        keys.reverse();
    }
    keys.into_iter().fold(None, |below, key| match below {
        None => Some(node(key)),
        Some(below) => Some(insert(Some(node(key)), below)),
    })
}

#[test]
fn deep_right_chain() {
    let n = 200_000;
    let root = chain(n, true);
    let root = root.as_deref();

    assert_eq!(root.map(Node::key), Some(0));
    assert_eq!(height(root), n as usize);
    assert_eq!(search(n - 1, root).map(Node::key), Some(n - 1));
    assert!(search(n, root).is_none());

    for order in Order::ALL.iter().copied() {
        let keys = order.keys(root);
        assert_eq!(keys.len(), n as usize);
        match order {
            Order::Pre | Order::In => assert!(keys.windows(2).all(|w| w[0] < w[1])),
            Order::Post => assert!(keys.windows(2).all(|w| w[0] > w[1])),
        }
    }

    let mut out: Vec<u8> = Vec::new();
    write_inorder(root, &mut out).unwrap();
    assert_eq!(out.iter().filter(|b| **b == b'\n').count(), n as usize);
}

#[test]
fn deep_left_chain() {
    let n = 200_000;
    let root = chain(n, false);
    let root = root.as_deref();

    assert_eq!(root.map(Node::key), Some(n - 1));
    assert_eq!(height(root), n as usize);
    assert_eq!(search(0, root).map(Node::key), Some(0));
    assert!(search(-1, root).is_none());

    let keys = Order::In.keys(root);
    assert_eq!(keys.first(), Some(&0));
    assert_eq!(keys.last(), Some(&(n - 1)));
    assert!(keys.windows(2).all(|w| w[0] < w[1]));
}
