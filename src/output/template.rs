//! Page header template loading.
//!
//! The header fragment carries the `<head>` section (styles and the
//! `clicked()` script) and is copied verbatim in front of the page body.

use crate::utils::config::DEFAULT_TEMPLATE_PATH;
use crate::utils::error::OutputError;
use log::{debug, warn};
use std::path::Path;

/// Header used when no template file is available
pub const FALLBACK_HEADER: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<title>CallGraph</title>
<style>
.left { float: left; width: 50%; }
.right { float: right; width: 50%; }
</style>
<script>
function clicked() {}
</script>
</head>"#;

/// Load the header fragment for the HTML page
///
/// **Public** - called by the merge command before rendering
///
/// # Arguments
/// * `path` - Explicit template path, or None to try the default location
///
/// # Returns
/// Template text. Without an explicit path, a missing default template falls
/// back to `FALLBACK_HEADER`.
///
/// # Errors
/// * `OutputError::TemplateUnreadable` - explicit template cannot be read, or
///   the default template exists but cannot be read
pub fn load_template(path: Option<&Path>) -> Result<String, OutputError> {
    let (path, explicit) = match path {
        Some(p) => (p, true),
        None => (Path::new(DEFAULT_TEMPLATE_PATH), false),
    };

    if !explicit && !path.exists() {
        warn!(
            "Template {} not found, using built-in header",
            path.display()
        );
        return Ok(FALLBACK_HEADER.to_string());
    }

    debug!("Loading template: {}", path.display());
    std::fs::read_to_string(path).map_err(|source| OutputError::TemplateUnreadable {
        path: path.to_path_buf(),
        source,
    })
}
