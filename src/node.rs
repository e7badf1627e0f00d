use crate::tree::{self, Tree};
use std::cmp;

/// A struct representing an internal node of a search tree.
///
/// Every node is owned by exactly one parent link (or by the tree root), so the structure can
/// never contain shared subtrees or cycles.
#[derive(Debug)]
pub struct Node {
    pub key: i32,
    pub height: usize,
    pub left: Tree,
    pub right: Tree,
}

impl Node {
    pub fn new(key: i32) -> Self {
        Node {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn update(&mut self) {
        let Node { ref mut height, ref left, ref right, .. } = self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }

    pub fn balance(&self) -> i32 {
        (tree::height(&self.left) as i32) - (tree::height(&self.right) as i32)
    }
}
