//! Interactive HTML view of a call tree.
//!
//! The page has two panes: a "CallGraph" table with one checkbox per call,
//! and an empty "CodeView" placeholder that the header's script fills in
//! when a checkbox changes.

use super::depth::DepthLimit;
use crate::aggregator::CallTree;
use crate::utils::config::HTML_INDENT_UNIT;
use quick_xml::escape::escape;

/// Render the full page: header fragment, both panes, closing tags
///
/// **Public** - main entry point for HTML generation
///
/// # Arguments
/// * `tree` - Merged call tree
/// * `limit` - Depth cutoff
/// * `header` - Template fragment placed before `<body>`
pub fn render_html_page(tree: &CallTree, limit: DepthLimit, header: &str) -> String {
    let mut page = String::with_capacity(header.len() + 64 * tree.node_count() + 256);

    page.push_str(header);
    page.push_str("\n<body>\n");
    push_left_pane(&mut page, tree, limit);
    push_right_pane(&mut page);
    page.push_str("\n</body>");
    page.push_str("\n</html>");

    page
}

/// Render only the `<tr>` rows of the call graph table
pub fn render_call_graph_rows(tree: &CallTree, limit: DepthLimit) -> String {
    let mut rows = String::new();
    push_rows(&mut rows, tree, limit);
    rows
}

fn push_left_pane(page: &mut String, tree: &CallTree, limit: DepthLimit) {
    page.push_str("\n<div class=\"left\">");
    page.push_str("\n<h1>CallGraph</h1>");
    page.push_str("\n<table>");
    push_rows(page, tree, limit);
    page.push_str("\n</table>");
    page.push_str("\n</div>");
}

fn push_right_pane(page: &mut String) {
    page.push_str("\n<div class=\"right\">");
    page.push_str("\n<h1>CodeView</h1>");
    page.push_str("\n<div id=code_content>");
    page.push_str("\n</div>");
    page.push_str("\n</div>");
}

// Unnamed nodes are transparent: no row, children stay at the same depth.
fn push_rows(page: &mut String, tree: &CallTree, limit: DepthLimit) {
    tree.walk(|node, depth| {
        if node.name().is_empty() {
            return Some(depth);
        }

        let name = escape(node.name());
        page.push_str("\n<tr>");
        page.push_str("\n  <td>");
        for _ in 0..depth {
            page.push_str(HTML_INDENT_UNIT);
        }
        page.push_str("\n    <input type=\"checkbox\" id=\"");
        page.push_str(&name);
        page.push_str("\" onchange=\"clicked()\" />");
        page.push_str(&name);
        page.push_str("  </td>");
        page.push_str("\n</tr>");

        let child_depth = depth + 1;
        limit.allows(child_depth).then_some(child_depth)
    });
}
