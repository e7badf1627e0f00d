//! An unbalanced binary search tree and a self-balancing AVL tree over `i32` keys.
//!
//! Both trees support insertion and a traced find-or-insert query that reports every key it
//! visits and inserts the queried key when it is missing. The AVL tree additionally supports
//! deletion. Each tree can render its shape as a parenthesized string for inspection.

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod node;
mod trace;
mod tree;
pub mod avl_tree;
pub mod bst;
pub mod config;
pub mod error;

pub use crate::avl_tree::AvlTree;
pub use crate::bst::BinarySearchTree;
pub use crate::error::{Error, Result};
pub use crate::trace::{Outcome, Trace};
pub use crate::tree::{IntoIter, Iter};
