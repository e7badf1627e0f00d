//! Free functions shared by both search trees. They only read the structure; mutation lives with
//! each tree because only the AVL tree rebalances.

use crate::node::Node;
use std::cmp::Ordering;
use std::fmt::Write;

pub type Tree = Option<Box<Node>>;

pub fn height(tree: &Tree) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

pub fn contains(tree: &Tree, key: i32) -> bool {
    let mut curr = tree;
    while let Some(ref node) = curr {
        match key.cmp(&node.key) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return true,
        }
    }
    false
}

/// Walks the comparison path for `key`, returning every visited key and whether the walk ended on
/// a node holding `key`.
pub fn search_path(tree: &Tree, key: i32) -> (Vec<i32>, bool) {
    let mut path = Vec::new();
    let mut curr = tree;
    while let Some(ref node) = curr {
        path.push(node.key);
        match key.cmp(&node.key) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return (path, true),
        }
    }
    (path, false)
}

pub fn min(tree: &Tree) -> Option<i32> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        curr.key
    })
}

pub fn max(tree: &Tree) -> Option<i32> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        curr.key
    })
}

pub fn render(tree: &Tree) -> String {
    let mut ret = String::new();
    render_into(tree, &mut ret);
    ret
}

fn render_into(tree: &Tree, out: &mut String) {
    if let Some(ref node) = tree {
        if node.is_leaf() {
            let _ = write!(out, "{}", node.key);
        } else {
            let _ = write!(out, "{}:(", node.key);
            render_into(&node.left, out);
            out.push(';');
            render_into(&node.right, out);
            out.push(')');
        }
    }
}

/// An iterator over the keys of a search tree.
///
/// This iterator traverses the keys in-order and therefore yields them in ascending order.
pub struct Iter<'a> {
    current: &'a Tree,
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(tree: &'a Tree) -> Self {
        Iter {
            current: tree,
            stack: Vec::new(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            node.key
        })
    }
}

/// An owning iterator over the keys of a search tree.
///
/// This iterator consumes the tree and yields keys in ascending order.
pub struct IntoIter {
    current: Tree,
    stack: Vec<Node>,
}

impl IntoIter {
    pub(crate) fn new(tree: Tree) -> Self {
        IntoIter {
            current: tree,
            stack: Vec::new(),
        }
    }
}

impl Iterator for IntoIter {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            key
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(key: i32) -> Tree {
        Some(Box::new(Node::new(key)))
    }

    fn branch(key: i32, left: Tree, right: Tree) -> Tree {
        let mut node = Node::new(key);
        node.left = left;
        node.right = right;
        node.update();
        Some(Box::new(node))
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&None), "");
    }

    #[test]
    fn test_render_three_nodes() {
        let tree = branch(5, leaf(3), leaf(8));
        assert_eq!(render(&tree), "5:(3;8)");
    }

    #[test]
    fn test_render_missing_child() {
        let tree = branch(5, None, branch(8, leaf(7), None));
        assert_eq!(render(&tree), "5:(;8:(7;))");
    }

    #[test]
    fn test_search_path() {
        let tree = branch(5, leaf(3), branch(8, leaf(7), None));
        assert_eq!(search_path(&tree, 7), (vec![5, 8, 7], true));
        assert_eq!(search_path(&tree, 9), (vec![5, 8], false));
        assert_eq!(search_path(&None, 1), (vec![], false));
    }

    #[test]
    fn test_min_max_contains() {
        let tree = branch(5, leaf(3), branch(8, leaf(7), None));
        assert_eq!(min(&tree), Some(3));
        assert_eq!(max(&tree), Some(8));
        assert!(contains(&tree, 7));
        assert!(!contains(&tree, 4));
        assert_eq!(min(&None), None);
    }

    #[test]
    fn test_iter_in_order() {
        let tree = branch(5, leaf(3), branch(8, leaf(7), None));
        assert_eq!(Iter::new(&tree).collect::<Vec<i32>>(), vec![3, 5, 7, 8]);
        assert_eq!(IntoIter::new(tree).collect::<Vec<i32>>(), vec![3, 5, 7, 8]);
    }
}
