use branch_merger::aggregator::CallTree;
use branch_merger::parser::{parse_trace_log, Branch, ParseMode};
use branch_merger::render::{render_call_graph_rows, render_console_tree, render_html_page, DepthLimit};
use pretty_assertions::assert_eq;

fn deep_tree() -> CallTree {
    let mut tree = CallTree::new();
    tree.insert_path(["main", "a", "a1", "a2"]);
    tree.insert_path(["main", "b", "b1"]);
    tree.insert_path(["init", "x"]);
    tree
}

fn line_depth(line: &str) -> usize {
    let indent = line.len() - line.trim_start_matches(' ').len();
    indent / 2
}

#[test]
fn test_two_samples_end_to_end() {
    let branches = vec![
        Branch::from_frames(["b", "a"]),
        Branch::from_frames(["c", "a"]),
        Branch::from_frames(["c", "a"]),
    ];
    let tree = CallTree::from_branches(&branches);

    assert_eq!(tree.roots().len(), 1);
    assert_eq!(render_console_tree(&tree, DepthLimit::Unlimited), "|-a\n  |-b\n  |-c\n");
}

#[test]
fn test_console_depth_matches_ancestors() {
    let dump = render_console_tree(&deep_tree(), DepthLimit::Unlimited);
    let depths: Vec<(usize, &str)> = dump
        .lines()
        .map(|l| (line_depth(l), l.trim_start().trim_start_matches("|-")))
        .collect();

    assert_eq!(
        depths,
        vec![
            (0, "init"),
            (1, "x"),
            (0, "main"),
            (1, "a"),
            (2, "a1"),
            (3, "a2"),
            (1, "b"),
            (2, "b1"),
        ]
    );
}

#[test]
fn test_depth_limit_is_subset_of_unlimited() {
    let tree = deep_tree();
    let full: Vec<String> = render_console_tree(&tree, DepthLimit::Unlimited)
        .lines()
        .map(str::to_string)
        .collect();

    for n in 0..5 {
        let limited = render_console_tree(&tree, DepthLimit::Max(n));
        let expected: Vec<&String> = full.iter().filter(|l| line_depth(l) <= n).collect();
        let actual: Vec<String> = limited.lines().map(str::to_string).collect();

        assert_eq!(actual.iter().collect::<Vec<_>>(), expected);
    }
}

#[test]
fn test_html_skips_unnamed_levels() {
    let log = "stack:\tx\n\n";
    let parsed = parse_trace_log(log, ParseMode::Strict).unwrap();
    let tree = CallTree::from_branches(&parsed.branches);

    let rows = render_call_graph_rows(&tree, DepthLimit::Unlimited);
    assert_eq!(rows.matches("<tr>").count(), 1);
    assert!(rows.contains("<td>\n    <input type=\"checkbox\" id=\"x\""));

    // the console form still shows the unnamed level
    assert_eq!(render_console_tree(&tree, DepthLimit::Unlimited), "|-\n  |-x\n");
}

#[test]
fn test_html_depth_limit_counts_visible_levels() {
    let mut tree = CallTree::new();
    tree.insert_path(["", "main", "run"]);

    let rows = render_call_graph_rows(&tree, DepthLimit::Max(0));
    assert_eq!(rows.matches("<tr>").count(), 1);
    assert!(rows.contains("id=\"main\""));
}

#[test]
fn test_rendering_is_repeatable() {
    let tree = deep_tree();

    assert_eq!(
        render_console_tree(&tree, DepthLimit::Max(2)),
        render_console_tree(&tree, DepthLimit::Max(2))
    );
    assert_eq!(
        render_html_page(&tree, DepthLimit::Unlimited, "<head></head>"),
        render_html_page(&tree, DepthLimit::Unlimited, "<head></head>")
    );
}

#[test]
fn test_empty_tree_page_has_both_panes() {
    let page = render_html_page(&CallTree::new(), DepthLimit::Unlimited, "");
    assert!(page.contains("<h1>CallGraph</h1>\n<table>\n</table>"));
    assert!(page.contains("<h1>CodeView</h1>"));
}
