//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod merge;
pub mod models;

// Re-export main command functions
pub use merge::{execute_merge, run_merge, validate_args};
pub use models::{MergeArgs, MergeReport};
