//! Branch Merger CLI
//!
//! Merges the stack samples in a trace log into a call tree, prints it,
//! and writes an interactive HTML call graph.

use anyhow::Result;
use branch_merger::commands::{execute_merge, validate_args, MergeArgs};
use branch_merger::parser::ParseMode;
use branch_merger::render::DepthLimit;
use branch_merger::utils::config::DEFAULT_OUTPUT_PATH;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

/// Branch Merger - call tree reduction for sampled stack logs
#[derive(Parser, Debug)]
#[command(name = "branch-merger")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Trace log to read
    input: PathBuf,

    /// Maximum depth to render (negative = unlimited)
    #[arg(allow_negative_numbers = true)]
    depth: i64,

    /// Output path for the HTML call graph
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// HTML header template (defaults to lib/head_content.html)
    #[arg(long, env = "BRANCH_MERGER_TEMPLATE")]
    template: Option<PathBuf>,

    /// Fail on lines that appear before the first stack marker
    #[arg(long)]
    strict: bool,

    /// Print every raw branch before the merged tree
    #[arg(long)]
    dump_branches: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = MergeArgs {
        input: cli.input,
        depth_limit: DepthLimit::from_arg(cli.depth),
        output_html: cli.output,
        template: cli.template,
        parse_mode: if cli.strict {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        },
        dump_branches: cli.dump_branches,
    };

    validate_args(&args)?;
    execute_merge(args)?;

    Ok(())
}
