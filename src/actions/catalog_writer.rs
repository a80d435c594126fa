use std::{io::Write, path::Path};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::NamedTempFile;

/// Serialize a catalog the way it is stored on disk.
///
/// 2-space indentation, object member order preserved, non-ASCII text written
/// verbatim and a single trailing newline.
pub fn render_catalog(document: &Value) -> Result<String> {
    let mut content =
        serde_json::to_string_pretty(document).context("Failed to serialize JSON")?;
    content.push('\n');
    Ok(content)
}

/// Replace `path` with `content`.
///
/// The content goes to a temporary file in the same directory first, which is
/// then renamed over the destination, so readers see either the old file or
/// the complete new one.
pub fn write_catalog(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    temp.write_all(content.as_bytes())
        .and_then(|_| temp.as_file().sync_all())
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    temp.persist(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
