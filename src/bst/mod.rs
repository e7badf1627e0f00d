//! Unbalanced binary search tree. Keys are attached where the comparison walk falls off the tree,
//! so the shape depends entirely on insertion order.

mod set;
mod tree;

pub use self::set::BinarySearchTree;
