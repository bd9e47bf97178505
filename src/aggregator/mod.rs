//! Aggregation of stack samples into a merged call tree.
//!
//! This module transforms parsed branches into:
//! - A prefix trie keyed by call name at each depth
//! - Shape statistics for logging

pub mod call_tree;
pub mod stats;

// Re-export main types and functions
pub use call_tree::{CallNode, CallTree, Children, NodeId};
pub use stats::{calculate_tree_stats, CallTreeStats};
