//! Parser for the `functions.log` trace format.
//!
//! Each sample starts on a marker line and lists one frame per line,
//! innermost call first:
//!
//! ```text
//! stack:	inner
//! 	outer
//! 	main
//!
//! ```
//!
//! The blank separator line written after every sample is kept as an empty
//! frame; renderers decide how to show it.

use super::branch::Branch;
use crate::utils::config::{STACK_MARKER, TRIM_CHARS};
use crate::utils::error::ParseError;
use log::{debug, warn};
use std::borrow::Cow;
use std::path::Path;

/// How to treat frame lines that show up before any marker line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Skip the orphan line and log a warning
    #[default]
    Lenient,
    /// Fail with `ParseError::MalformedInput`
    Strict,
}

/// Counters gathered while parsing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    /// Lines read from the log
    pub lines: usize,
    /// Samples (marker lines) found
    pub branches: usize,
    /// Orphan lines dropped in lenient mode
    pub skipped: usize,
}

impl ParseSummary {
    /// One-line summary for console output
    pub fn summary(&self) -> String {
        if self.skipped > 0 {
            format!(
                "{} lines, {} branches ({} orphan lines skipped)",
                self.lines, self.branches, self.skipped
            )
        } else {
            format!("{} lines, {} branches", self.lines, self.branches)
        }
    }
}

/// Result of parsing a whole trace log
#[derive(Debug, Clone, Default)]
pub struct ParsedLog {
    pub branches: Vec<Branch>,
    pub summary: ParseSummary,
}

/// Read a trace log from disk and parse it
///
/// **Public** - entry point used by the merge command
///
/// # Errors
/// * `ParseError::InputNotFound` - file cannot be opened or read
/// * `ParseError::MalformedInput` - orphan line in strict mode
pub fn read_trace_log(path: impl AsRef<Path>, mode: ParseMode) -> Result<ParsedLog, ParseError> {
    let path = path.as_ref();
    debug!("Reading trace log: {}", path.display());

    let bytes = std::fs::read(path).map_err(|source| ParseError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    // Interpreter identifiers are raw bytes, not necessarily UTF-8
    let text = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = text {
        warn!("Trace log {} is not valid UTF-8, invalid bytes replaced", path.display());
    }

    parse_trace_log(&text, mode)
}

/// Parse trace log text into branches
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `text` - Full contents of the log
/// * `mode` - Policy for lines that precede the first marker
///
/// # Returns
/// Branches in log order plus parse counters
pub fn parse_trace_log(text: &str, mode: ParseMode) -> Result<ParsedLog, ParseError> {
    let mut branches: Vec<Branch> = Vec::new();
    let mut summary = ParseSummary::default();

    for (index, line) in text.lines().enumerate() {
        summary.lines += 1;

        if let Some(first) = marker_payload(line) {
            branches.push(Branch::new(first));
            continue;
        }

        let frame = trim_frame(line);
        match branches.last_mut() {
            Some(current) => current.push(frame),
            None => {
                let line_no = index + 1;
                match mode {
                    ParseMode::Strict => {
                        return Err(ParseError::MalformedInput {
                            line: line_no,
                            content: frame.to_string(),
                        });
                    }
                    ParseMode::Lenient => {
                        warn!("Skipping line {} before first stack marker: {:?}", line_no, frame);
                        summary.skipped += 1;
                    }
                }
            }
        }
    }

    summary.branches = branches.len();
    debug!("Parsed trace log: {}", summary.summary());

    Ok(ParsedLog { branches, summary })
}

/// Return the trimmed call name following the marker, if the line has one
///
/// **Private** - internal helper for parse_trace_log
fn marker_payload(line: &str) -> Option<&str> {
    line.find(STACK_MARKER)
        .map(|pos| trim_frame(&line[pos + STACK_MARKER.len()..]))
}

/// Trim ASCII whitespace (including vertical tab) from both ends
pub fn trim_frame(raw: &str) -> &str {
    raw.trim_matches(TRIM_CHARS)
}
