//! Depth cutoff shared by every renderer.

use std::fmt;

/// Maximum depth to render; deeper subtrees are pruned entirely
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DepthLimit {
    #[default]
    Unlimited,
    /// Render nodes whose depth is at most this value (roots are depth 0)
    Max(usize),
}

impl DepthLimit {
    /// Interpret the CLI depth argument; any negative value means unlimited
    pub fn from_arg(value: i64) -> Self {
        match usize::try_from(value) {
            Ok(max) => DepthLimit::Max(max),
            Err(_) => DepthLimit::Unlimited,
        }
    }

    /// Whether a node at `depth` should be rendered
    pub fn allows(self, depth: usize) -> bool {
        match self {
            DepthLimit::Unlimited => true,
            DepthLimit::Max(max) => depth <= max,
        }
    }
}

impl fmt::Display for DepthLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepthLimit::Unlimited => write!(f, "unlimited"),
            DepthLimit::Max(max) => write!(f, "{}", max),
        }
    }
}
