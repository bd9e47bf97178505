//! Branch Merger
//!
//! Reduces a log of sampled call stacks into one deduplicated call tree
//! and renders it as an indented text dump and an interactive HTML page.
//!
//! This crate provides the core implementation for the
//! `branch-merger` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! branch-merger functions.log -1
//! ```
//!
//! Library use follows the same pipeline:
//!
//! ```
//! use branch_merger::aggregator::CallTree;
//! use branch_merger::parser::{parse_trace_log, ParseMode};
//! use branch_merger::render::{render_console_tree, DepthLimit};
//!
//! let log = "stack:\tb\n\ta\nstack:\tc\n\ta\n";
//! let parsed = parse_trace_log(log, ParseMode::Strict).unwrap();
//! let tree = CallTree::from_branches(&parsed.branches);
//! assert_eq!(render_console_tree(&tree, DepthLimit::Unlimited), "|-a\n  |-b\n  |-c\n");
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod render;
pub mod utils;
