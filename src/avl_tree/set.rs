use crate::avl_tree::tree as avl;
use crate::trace::{Outcome, Trace};
use crate::tree::{self, IntoIter, Iter};
use std::fmt;
use std::iter::FromIterator;

/// An ordered set of integer keys stored in an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Every insertion and deletion
/// rebalances the nodes on the path back to the root.
///
/// # Examples
/// ```
/// use search_trees::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.add(1);
/// tree.add(2);
/// tree.add(3);
///
/// assert_eq!(tree.render(), "2:(1;3)");
/// assert_eq!(tree.height(), 2);
///
/// assert!(tree.delete(2));
/// assert_eq!(tree.render(), "3:(1;)");
/// ```
#[derive(Debug, Default)]
pub struct AvlTree {
    tree: tree::Tree,
    size: usize,
}

impl AvlTree {
    /// Constructs a new, empty `AvlTree`.
    pub fn new() -> Self {
        AvlTree {
            tree: None,
            size: 0,
        }
    }

    /// Inserts a key into the tree and rebalances every ancestor of the insertion point. Adding a
    /// key that is already present leaves the keys unchanged and is not reported.
    ///
    /// # Examples
    /// ```
    /// use search_trees::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.add(1);
    /// tree.add(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn add(&mut self, key: i32) {
        if avl::insert(&mut self.tree, key) {
            self.size += 1;
            trace!("avl: inserted {}", key);
        } else {
            trace!("avl: absorbed duplicate {}", key);
        }
    }

    /// Searches for a key, recording every visited key. A missing key is inserted through `add`,
    /// so the tree may be rebalanced, and ends the trace.
    ///
    /// # Examples
    /// ```
    /// use search_trees::{AvlTree, Outcome};
    ///
    /// let mut tree: AvlTree = vec![2, 1, 3].into_iter().collect();
    /// let trace = tree.find_or_insert(4);
    /// assert_eq!(trace.path(), &[2, 3, 4]);
    /// assert_eq!(trace.outcome(), Outcome::Inserted);
    /// ```
    pub fn find_or_insert(&mut self, key: i32) -> Trace {
        let (mut path, found) = tree::search_path(&self.tree, key);
        if found {
            debug!("avl: found {} after {} comparisons", key, path.len());
            return Trace::new(path, Outcome::Found);
        }

        self.add(key);
        path.push(key);
        debug!("avl: inserted missing {} below a path of {}", key, path.len() - 1);
        Trace::new(path, Outcome::Inserted)
    }

    /// Removes a key from the tree. A node with a right subtree takes the key of its in-order
    /// successor, which is then removed from that subtree instead. Returns `false` if the key was
    /// not present.
    ///
    /// # Examples
    /// ```
    /// use search_trees::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.add(1);
    /// assert!(tree.delete(1));
    /// assert!(!tree.delete(1));
    /// ```
    pub fn delete(&mut self, key: i32) -> bool {
        let removed = avl::remove(&mut self.tree, key);
        if removed {
            self.size -= 1;
            debug!("avl: deleted {}", key);
        }
        removed
    }

    /// Returns the parenthesized shape of the tree, in the same format as
    /// `BinarySearchTree::render`.
    pub fn render(&self) -> String {
        tree::render(&self.tree)
    }

    /// Checks if a key exists in the tree without modifying it.
    pub fn contains(&self, key: i32) -> bool {
        tree::contains(&self.tree, key)
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Returns `true` if every node's subtree heights differ by at most one. Heights are
    /// recomputed rather than read from the nodes.
    pub fn is_balanced(&self) -> bool {
        avl::checked_height(&self.tree).is_some()
    }

    pub fn min(&self) -> Option<i32> {
        tree::min(&self.tree)
    }

    pub fn max(&self) -> Option<i32> {
        tree::max(&self.tree)
    }

    /// Clears the tree, removing all keys.
    pub fn clear(&mut self) {
        self.tree = None;
        self.size = 0;
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter {
        Iter::new(&self.tree)
    }
}

impl fmt::Display for AvlTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl IntoIterator for AvlTree {
    type IntoIter = IntoIter;
    type Item = i32;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.tree)
    }
}

impl<'a> IntoIterator for &'a AvlTree {
    type IntoIter = Iter<'a>;
    type Item = i32;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<i32> for AvlTree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}

impl FromIterator<i32> for AvlTree {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}
