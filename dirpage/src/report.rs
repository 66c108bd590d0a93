use crate::args::OutputFormat;
use crate::error::DirpageError;
use crate::utils::html::escape;
use serde_json::json;

/// Renders a failed listing in the requested output format, so a consumer
/// can tell it apart from a directory with no matching files.
pub fn render_error(format: OutputFormat, err: &DirpageError) -> String {
    let path = match err {
        DirpageError::DirectoryUnreadable { path, .. } => Some(path.display().to_string()),
        _ => None,
    };

    if format.is_json() {
        json!({ "error": err.to_string(), "path": path }).to_string()
    } else {
        format!(
            "<p class=\"error\">Cannot list files: {}</p>",
            escape(&err.to_string())
        )
    }
}
