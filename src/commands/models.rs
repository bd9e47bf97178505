use crate::aggregator::CallTreeStats;
use crate::parser::{ParseMode, ParseSummary};
use crate::render::DepthLimit;
use crate::utils::config::DEFAULT_OUTPUT_PATH;
use std::path::PathBuf;

/// Arguments for the merge command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct MergeArgs {
    /// Trace log written by the instrumentation layer
    pub input: PathBuf,

    /// Depth cutoff applied to both renderers
    pub depth_limit: DepthLimit,

    /// Output path for the HTML page
    pub output_html: PathBuf,

    /// Header template (None = default location or built-in header)
    pub template: Option<PathBuf>,

    /// Policy for lines before the first marker
    pub parse_mode: ParseMode,

    /// Also dump every raw branch to stdout
    pub dump_branches: bool,
}

impl Default for MergeArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            depth_limit: DepthLimit::Unlimited,
            output_html: PathBuf::from(DEFAULT_OUTPUT_PATH),
            template: None,
            parse_mode: ParseMode::Lenient,
            dump_branches: false,
        }
    }
}

/// Everything the merge pipeline produced besides the HTML file
#[derive(Debug, Clone)]
pub struct MergeReport {
    pub parse_summary: ParseSummary,
    pub tree_stats: CallTreeStats,
    /// Console dump of the merged tree
    pub console: String,
    /// Raw branch dump, when requested
    pub branch_dump: Option<String>,
}
