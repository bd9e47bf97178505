//! Merge stack samples into a prefix-sharing call tree.
//!
//! Every branch is inserted outermost caller first, so samples that share
//! callers share the same path of nodes and only fork where they differ.
//!
//! Example: samples `[b, a]` and `[c, a]` (innermost first) become
//!
//! ```text
//! a
//! ├─ b
//! └─ c
//! ```
//!
//! Nodes live in one flat arena and refer to their children by index, so
//! stacks of any depth are built, walked and dropped without recursion.

use crate::parser::Branch;
use log::debug;
use std::collections::{btree_map, BTreeMap};

/// Index of a node in its tree's arena
pub type NodeId = usize;

/// Children keyed by call name, iterated in lexicographic order
pub type Children = BTreeMap<String, NodeId>;

/// One call name at one position in the merged hierarchy
#[derive(Debug, Clone, Default)]
pub struct CallNode {
    name: String,
    samples: u64,
    children: Children,
}

impl CallNode {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            samples: 0,
            children: Children::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of samples whose path runs through this node
    pub fn samples(&self) -> u64 {
        self.samples
    }

    pub fn children(&self) -> &Children {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Merged call tree with an implicit root
///
/// **Public** - built once by the merge command, then handed to renderers
#[derive(Debug, Clone, Default)]
pub struct CallTree {
    nodes: Vec<CallNode>,
    roots: Children,
}

impl CallTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from every branch of a parsed log
    pub fn from_branches(branches: &[Branch]) -> Self {
        debug!("Merging {} branches into call tree", branches.len());

        let mut tree = Self::new();
        for branch in branches {
            tree.merge_branch(branch);
        }
        tree
    }

    /// Insert one sample, outermost caller first
    pub fn merge_branch(&mut self, branch: &Branch) {
        self.insert_path(branch.outermost_first());
    }

    /// Insert a root-to-leaf path, reusing nodes that already exist
    pub fn insert_path<'a, I>(&mut self, path: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut parent: Option<NodeId> = None;
        for name in path {
            let fresh = self.nodes.len();
            let level = match parent {
                Some(id) => &mut self.nodes[id].children,
                None => &mut self.roots,
            };
            let id = match level.get(name) {
                Some(&id) => id,
                None => {
                    level.insert(name.to_string(), fresh);
                    fresh
                }
            };
            if id == fresh {
                self.nodes.push(CallNode::new(name));
            }
            self.nodes[id].samples += 1;
            parent = Some(id);
        }
    }

    /// Top-level calls in key order
    pub fn roots(&self) -> &Children {
        &self.roots
    }

    pub fn node(&self, id: NodeId) -> &CallNode {
        &self.nodes[id]
    }

    pub fn child(&self, node: &CallNode, name: &str) -> Option<&CallNode> {
        node.children.get(name).map(|&id| self.node(id))
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Look up a node by its root-to-leaf path
    pub fn get(&self, path: &[&str]) -> Option<&CallNode> {
        let (first, rest) = path.split_first()?;
        let mut node = self.node(*self.roots.get(*first)?);
        for name in rest {
            node = self.child(node, name)?;
        }
        Some(node)
    }

    /// Total number of nodes below the implicit root
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Depth-first, pre-order walk in key order, starting at depth 0.
    ///
    /// `visit` gets each node with its depth and returns the depth to give
    /// its children, or `None` to skip the whole subtree.
    pub fn walk<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a CallNode, usize) -> Option<usize>,
    {
        let mut stack: Vec<(btree_map::Values<'a, String, NodeId>, usize)> =
            vec![(self.roots.values(), 0)];

        while let Some((siblings, depth)) = stack.last_mut() {
            let depth = *depth;
            let next = match siblings.next() {
                Some(&id) => id,
                None => {
                    stack.pop();
                    continue;
                }
            };

            let node = self.node(next);
            if let Some(child_depth) = visit(node, depth) {
                if !node.is_leaf() {
                    stack.push((node.children.values(), child_depth));
                }
            }
        }
    }
}

// Structural equality: same names, same sample counts, same shape.
// Arena indices depend on insertion order and are not compared.
impl PartialEq for CallTree {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(&self.roots, &other.roots)];

        while let Some((left, right)) = pending.pop() {
            if left.len() != right.len() {
                return false;
            }
            for ((left_name, &l), (right_name, &r)) in left.iter().zip(right) {
                let (l, r) = (self.node(l), other.node(r));
                if left_name != right_name || l.samples != r.samples {
                    return false;
                }
                pending.push((&l.children, &r.children));
            }
        }
        true
    }
}

impl Eq for CallTree {}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(tree: &CallTree, node: &CallNode) -> Vec<String> {
        node.children()
            .values()
            .map(|&id| tree.node(id).name().to_string())
            .collect()
    }

    #[test]
    fn test_shared_prefix_is_merged() {
        let mut tree = CallTree::new();
        tree.insert_path(["a", "b", "c"]);
        tree.insert_path(["a", "c", "c"]);

        assert_eq!(tree.roots().len(), 1);
        let a = tree.get(&["a"]).unwrap();
        assert_eq!(a.samples(), 2);
        assert_eq!(names(&tree, a), vec!["b", "c"]);
        assert!(tree.get(&["a", "b", "c"]).unwrap().is_leaf());
        assert!(tree.get(&["a", "c", "c"]).is_some());
        assert_eq!(tree.node_count(), 5);
    }

    #[test]
    fn test_identical_branch_adds_no_nodes() {
        let branch = Branch::from_frames(["leaf", "mid", "main"]);
        let mut tree = CallTree::new();
        tree.merge_branch(&branch);
        let before = tree.node_count();
        tree.merge_branch(&branch);

        assert_eq!(tree.node_count(), before);
        assert_eq!(tree.get(&["main", "mid", "leaf"]).unwrap().samples(), 2);
    }

    #[test]
    fn test_same_name_at_different_depths_is_distinct() {
        let mut tree = CallTree::new();
        tree.insert_path(["f", "g"]);
        tree.insert_path(["g"]);

        assert!(tree.get(&["g"]).is_some());
        assert!(tree.get(&["f", "g"]).is_some());
        assert_eq!(tree.node_count(), 3);
    }

    #[test]
    fn test_empty_names_are_nodes() {
        let branch = Branch::from_frames(["x", ""]);
        let tree = CallTree::from_branches(&[branch]);
        assert_eq!(tree.get(&[""]).unwrap().name(), "");
        assert!(tree.get(&["", "x"]).is_some());
    }

    #[test]
    fn test_empty_branch_contributes_nothing() {
        let tree = CallTree::from_branches(&[Branch::default()]);
        assert!(tree.is_empty());
        assert!(tree.get(&[]).is_none());
    }

    #[test]
    fn test_walk_is_preorder_in_key_order() {
        let mut tree = CallTree::new();
        tree.insert_path(["m", "z"]);
        tree.insert_path(["m", "b", "c"]);
        tree.insert_path(["a"]);

        let mut seen = Vec::new();
        tree.walk(|node, depth| {
            seen.push((depth, node.name()));
            Some(depth + 1)
        });
        assert_eq!(seen, vec![(0, "a"), (0, "m"), (1, "b"), (2, "c"), (1, "z")]);
    }

    #[test]
    fn test_walk_skips_pruned_subtrees() {
        let mut tree = CallTree::new();
        tree.insert_path(["a", "b", "c"]);
        tree.insert_path(["d"]);

        let mut seen = Vec::new();
        tree.walk(|node, depth| {
            seen.push(node.name());
            (node.name() != "a").then_some(depth + 1)
        });
        assert_eq!(seen, vec!["a", "d"]);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let mut left = CallTree::new();
        left.insert_path(["a", "b"]);
        left.insert_path(["c"]);
        let mut right = CallTree::new();
        right.insert_path(["c"]);
        right.insert_path(["a", "b"]);

        assert_eq!(left, right);
        right.insert_path(["a", "b"]);
        assert_ne!(left, right);
    }

    #[test]
    fn test_very_deep_path() {
        let frames: Vec<String> = (0..200_000).map(|i| format!("f{}", i)).collect();
        let mut tree = CallTree::new();
        tree.insert_path(frames.iter().map(String::as_str));
        tree.insert_path(frames.iter().map(String::as_str));

        assert_eq!(tree.node_count(), 200_000);
        assert_eq!(tree.get(&["f0", "f1"]).unwrap().samples(), 2);

        let mut deepest = 0;
        tree.walk(|_, depth| {
            deepest = depth;
            Some(depth + 1)
        });
        assert_eq!(deepest, 199_999);

        let copy = tree.clone();
        assert_eq!(copy, tree);
        drop(tree);
        drop(copy);
    }
}
