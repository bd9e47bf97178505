//! Shape statistics for a merged call tree.

use super::call_tree::CallTree;

/// Summary of a merged call tree, logged after merging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallTreeStats {
    pub root_count: usize,
    pub node_count: usize,
    /// Depth of the deepest node (roots are depth 0)
    pub max_depth: usize,
    /// Nodes with an empty call name
    pub empty_nodes: usize,
}

impl CallTreeStats {
    /// Get a summary string
    pub fn summary(&self) -> String {
        format!(
            "{} roots, {} nodes, max depth {}, {} unnamed",
            self.root_count, self.node_count, self.max_depth, self.empty_nodes
        )
    }
}

/// Walk the tree once and collect its statistics
///
/// **Public** - used by the merge command for logging
pub fn calculate_tree_stats(tree: &CallTree) -> CallTreeStats {
    let mut stats = CallTreeStats {
        root_count: tree.roots().len(),
        ..Default::default()
    };
    tree.walk(|node, depth| {
        stats.node_count += 1;
        stats.max_depth = stats.max_depth.max(depth);
        if node.name().is_empty() {
            stats.empty_nodes += 1;
        }
        Some(depth + 1)
    });
    stats
}
