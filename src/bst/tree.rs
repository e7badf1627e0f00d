use crate::node::Node;
use crate::tree::Tree;
use std::cmp::Ordering;

pub fn insert(tree: &mut Tree, key: i32) -> bool {
    let ret = match tree {
        Some(ref mut node) => match key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, key),
            Ordering::Greater => insert(&mut node.right, key),
            Ordering::Equal => return false,
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return true;
        },
    };

    if ret {
        if let Some(ref mut node) = tree {
            node.update();
        }
    }
    ret
}
