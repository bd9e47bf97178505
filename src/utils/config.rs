//! Configuration and constants for the CLI.

/// Token that opens a new stack sample in the trace log
pub const STACK_MARKER: &str = "stack:";

/// Characters stripped from both ends of every log line
pub const TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r', '\x0c', '\x0b'];

/// Where the generated page goes when `--output` is not given
pub const DEFAULT_OUTPUT_PATH: &str = "index_.html";

/// Header fragment looked up when `--template` is not given
pub const DEFAULT_TEMPLATE_PATH: &str = "lib/head_content.html";

// Console dump formatting
pub const INDENT_UNIT: &str = "  ";
pub const BULLET: &str = "|-";

// One indentation level in the HTML call graph
pub const HTML_INDENT_UNIT: &str = "&nbsp;&nbsp;";
