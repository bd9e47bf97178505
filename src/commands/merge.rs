//! Merge command implementation.
//!
//! The merge command:
//! 1. Reads and parses the trace log
//! 2. Merges branches into a call tree
//! 3. Renders the console dump
//! 4. Renders and writes the HTML page

use super::models::{MergeArgs, MergeReport};
use crate::aggregator::{calculate_tree_stats, CallTree};
use crate::output::{load_template, write_html};
use crate::parser::read_trace_log;
use crate::render::{render_branch_dump, render_console_tree, render_html_page};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the merge command and print the console output
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input file missing or unreadable
/// * Malformed input in strict mode
/// * Template or HTML file errors
pub fn execute_merge(args: MergeArgs) -> Result<()> {
    let report = run_merge(&args)?;

    println!("{}: {}", args.input.display(), report.parse_summary.summary());
    if let Some(dump) = &report.branch_dump {
        print!("{}", dump);
    }
    print!("{}", report.console);

    Ok(())
}

/// Run the whole pipeline without printing to stdout
///
/// **Public** - used by execute_merge and by tests
pub fn run_merge(args: &MergeArgs) -> Result<MergeReport> {
    let start_time = Instant::now();

    info!("Merging trace log: {}", args.input.display());
    info!("Depth limit: {}", args.depth_limit);

    // Step 1: Parse
    info!("Step 1/4: Parsing trace log...");
    let parsed = read_trace_log(&args.input, args.parse_mode)
        .with_context(|| format!("Failed to parse trace log {}", args.input.display()))?;

    debug!("Parsed {}", parsed.summary.summary());

    // Step 2: Merge
    info!("Step 2/4: Merging {} branches...", parsed.branches.len());
    let tree = CallTree::from_branches(&parsed.branches);
    let tree_stats = calculate_tree_stats(&tree);
    info!("Call tree: {}", tree_stats.summary());

    // Step 3: Console dump
    info!("Step 3/4: Rendering console dump...");
    let console = render_console_tree(&tree, args.depth_limit);
    let branch_dump = args
        .dump_branches
        .then(|| render_branch_dump(&parsed.branches));

    // Step 4: HTML page
    info!("Step 4/4: Rendering HTML page...");
    let header = load_template(args.template.as_deref()).context("Failed to load HTML template")?;
    let page = render_html_page(&tree, args.depth_limit, &header);
    write_html(&page, &args.output_html).context("Failed to write HTML page")?;

    info!("✓ Call graph written to: {}", args.output_html.display());

    let elapsed = start_time.elapsed();
    info!("Merge completed in {:.2}s", elapsed.as_secs_f64());

    Ok(MergeReport {
        parse_summary: parsed.summary,
        tree_stats,
        console,
        branch_dump,
    })
}

/// Validate merge arguments
///
/// **Public** - can be called before execute_merge for early validation
pub fn validate_args(args: &MergeArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.output_html.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.output_html == args.input {
        anyhow::bail!("Output path would overwrite the input log");
    }

    Ok(())
}
