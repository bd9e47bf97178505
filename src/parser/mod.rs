//! Trace log parsing.
//!
//! This module handles:
//! - Reading the raw log written by the instrumentation layer
//! - Splitting it into stack samples at `stack:` markers
//! - Dealing with lines that have no sample to belong to

pub mod branch;
pub mod trace_log;

// Re-export main types
pub use branch::Branch;
pub use trace_log::{parse_trace_log, read_trace_log, trim_frame, ParseMode, ParseSummary, ParsedLog};
