use crate::node::Node;
use crate::tree::{self, Tree};
use std::cmp::Ordering;

fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

fn balance(tree: &mut Tree) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                trace!("avl: LR rotation at {}", node.key);
                node.left = Some(rotate_left(child));
            } else {
                trace!("avl: LL rotation at {}", node.key);
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                trace!("avl: RL rotation at {}", node.key);
                node.right = Some(rotate_right(child));
            } else {
                trace!("avl: RR rotation at {}", node.key);
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// an equal key changes nothing but every ancestor on the path is still rebalanced
pub fn insert(tree: &mut Tree, key: i32) -> bool {
    let ret = match tree {
        Some(ref mut node) => match key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, key),
            Ordering::Greater => insert(&mut node.right, key),
            Ordering::Equal => false,
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return true;
        },
    };

    balance(tree);
    ret
}

pub fn remove(tree: &mut Tree, key: i32) -> bool {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return false,
    };

    let ret = match key.cmp(&node.key) {
        Ordering::Less => remove(&mut node.left, key),
        Ordering::Greater => remove(&mut node.right, key),
        Ordering::Equal => match tree::min(&node.right) {
            Some(successor) => {
                node.key = successor;
                remove(&mut node.right, successor)
            },
            None => {
                *tree = node.left.take();
                return true;
            },
        },
    };

    *tree = Some(node);
    balance(tree);
    ret
}

/// Recomputes every height from scratch and checks both the AVL condition and the cached heights.
/// Returns the recomputed height when the subtree is valid.
pub fn checked_height(tree: &Tree) -> Option<usize> {
    match tree {
        None => Some(0),
        Some(ref node) => {
            let left = checked_height(&node.left)?;
            let right = checked_height(&node.right)?;
            let height = left.max(right) + 1;
            if (left as i64 - right as i64).abs() > 1 || height != node.height {
                return None;
            }
            Some(height)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{checked_height, insert, remove};
    use crate::tree::{self, Tree};

    fn build(keys: &[i32]) -> Tree {
        let mut t = None;
        for key in keys {
            insert(&mut t, *key);
        }
        t
    }

    #[test]
    fn test_rotate_ll() {
        let t = build(&[3, 2, 1]);
        assert_eq!(tree::render(&t), "2:(1;3)");
    }

    #[test]
    fn test_rotate_rr() {
        let t = build(&[1, 2, 3]);
        assert_eq!(tree::render(&t), "2:(1;3)");
    }

    #[test]
    fn test_rotate_lr() {
        let t = build(&[3, 1, 2]);
        assert_eq!(tree::render(&t), "2:(1;3)");
    }

    #[test]
    fn test_rotate_rl() {
        let t = build(&[1, 3, 2]);
        assert_eq!(tree::render(&t), "2:(1;3)");
    }

    #[test]
    fn test_insert_duplicate() {
        let mut t = build(&[2, 1, 3]);
        assert!(!insert(&mut t, 3));
        assert_eq!(tree::render(&t), "2:(1;3)");
    }

    #[test]
    fn test_remove_with_balanced_left_child() {
        let mut t = build(&[5, 3, 6, 2, 4]);
        assert_eq!(tree::render(&t), "5:(3:(2;4);6)");
        assert!(remove(&mut t, 6));
        assert_eq!(tree::render(&t), "3:(2;5:(4;))");
        assert_eq!(checked_height(&t), Some(3));
    }

    #[test]
    fn test_remove_promotes_successor() {
        let mut t = build(&[2, 1, 4, 3]);
        assert!(remove(&mut t, 2));
        assert_eq!(tree::render(&t), "3:(1;4)");
    }

    #[test]
    fn test_remove_missing() {
        let mut t = build(&[2, 1, 3]);
        assert!(!remove(&mut t, 7));
        assert_eq!(tree::render(&t), "2:(1;3)");
    }

    #[test]
    fn test_checked_height_rejects_stale_height() {
        let mut t = build(&[2, 1, 3]);
        if let Some(ref mut node) = t {
            node.height = 5;
        }
        assert_eq!(checked_height(&t), None);
    }
}
