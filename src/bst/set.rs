use crate::bst::tree as bst;
use crate::trace::{Outcome, Trace};
use crate::tree::{self, IntoIter, Iter};
use std::fmt;
use std::iter::FromIterator;

/// An ordered set of integer keys stored in an unbalanced binary search tree.
///
/// Duplicate keys are rejected. Searching for a missing key with `find_or_insert` inserts it.
///
/// # Examples
/// ```
/// use search_trees::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::new();
/// assert!(tree.add(5));
/// assert!(tree.add(3));
/// assert!(tree.add(8));
/// assert!(!tree.add(3));
///
/// assert_eq!(tree.render(), "5:(3;8)");
///
/// let trace = tree.find_or_insert(9);
/// assert_eq!(trace.path(), &[5, 8, 9]);
/// assert_eq!(tree.len(), 4);
/// ```
#[derive(Debug, Default)]
pub struct BinarySearchTree {
    tree: tree::Tree,
    size: usize,
}

impl BinarySearchTree {
    /// Constructs a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        BinarySearchTree {
            tree: None,
            size: 0,
        }
    }

    /// Inserts a key into the tree. Returns `false` and leaves the tree untouched if the key is
    /// already present.
    ///
    /// # Examples
    /// ```
    /// use search_trees::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert!(tree.add(1));
    /// assert!(!tree.add(1));
    /// ```
    pub fn add(&mut self, key: i32) -> bool {
        let inserted = bst::insert(&mut self.tree, key);
        if inserted {
            self.size += 1;
            trace!("bst: inserted {}", key);
        } else {
            trace!("bst: rejected duplicate {}", key);
        }
        inserted
    }

    /// Searches for a key, recording every visited key. A missing key is inserted at the point
    /// where the search fell off the tree and ends the trace.
    ///
    /// # Examples
    /// ```
    /// use search_trees::{BinarySearchTree, Outcome};
    ///
    /// let mut tree = BinarySearchTree::new();
    /// let trace = tree.find_or_insert(4);
    /// assert_eq!(trace.path(), &[4]);
    /// assert_eq!(trace.outcome(), Outcome::Inserted);
    ///
    /// let trace = tree.find_or_insert(4);
    /// assert_eq!(trace.outcome(), Outcome::Found);
    /// ```
    pub fn find_or_insert(&mut self, key: i32) -> Trace {
        let (mut path, found) = tree::search_path(&self.tree, key);
        if found {
            debug!("bst: found {} after {} comparisons", key, path.len());
            return Trace::new(path, Outcome::Found);
        }

        self.add(key);
        path.push(key);
        debug!("bst: inserted missing {} at depth {}", key, path.len());
        Trace::new(path, Outcome::Inserted)
    }

    /// Returns the parenthesized shape of the tree: a leaf is its bare key and an internal node
    /// is `key:(left;right)` with an absent child rendered as nothing.
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

impl fmt::Display for BinarySearchTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl IntoIterator for BinarySearchTree {
    type IntoIter = IntoIter;
    type Item = i32;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.tree)
    }
}

impl<'a> IntoIterator for &'a BinarySearchTree {
    type IntoIter = Iter<'a>;
    type Item = i32;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<i32> for BinarySearchTree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}

impl FromIterator<i32> for BinarySearchTree {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}
