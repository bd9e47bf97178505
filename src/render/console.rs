//! Indented text dump of a call tree.
//!
//! Format: one line per node, two spaces per level, then `|-` and the name.
//!
//! ```text
//! |-a
//!   |-b
//!   |-c
//! ```

use super::depth::DepthLimit;
use crate::aggregator::CallTree;
use crate::parser::Branch;
use crate::utils::config::{BULLET, INDENT_UNIT};

/// Render the tree as a console dump
///
/// **Public** - main entry point for console output
///
/// Unnamed nodes are printed as a bare bullet and still take up a level.
pub fn render_console_tree(tree: &CallTree, limit: DepthLimit) -> String {
    let mut out = String::new();
    tree.walk(|node, depth| {
        for _ in 0..depth {
            out.push_str(INDENT_UNIT);
        }
        out.push_str(BULLET);
        out.push_str(node.name());
        out.push('\n');

        let child_depth = depth + 1;
        limit.allows(child_depth).then_some(child_depth)
    });
    out
}

/// Dump raw branches, outermost call first, for inspecting a log
pub fn render_branch_dump(branches: &[Branch]) -> String {
    let mut out = format!("number of branches:{}\n", branches.len());
    for branch in branches {
        for call in branch.outermost_first() {
            out.push_str(call);
            out.push('\n');
        }
    }
    out
}
