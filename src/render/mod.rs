//! Rendering of merged call trees.
//!
//! Both renderers walk the tree depth-first in key order and honor the
//! same `DepthLimit`:
//! - Console dump (indented text)
//! - Interactive HTML page (checkbox table)

pub mod console;
pub mod depth;
pub mod html;

pub use console::{render_branch_dump, render_console_tree};
pub use depth::DepthLimit;
pub use html::{render_call_graph_rows, render_html_page};
