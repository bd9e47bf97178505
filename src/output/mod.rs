//! Output writers for the generated call graph page.
//!
//! This module handles:
//! - Loading the page header template
//! - Writing the rendered HTML to disk

pub mod html;
pub mod template;

// Re-export main functions
pub use html::write_html;
pub use template::{load_template, FALLBACK_HEADER};
