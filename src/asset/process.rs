//! Per-file processing: minify or copy into the mirrored output path.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::config::BuildConfig;
use crate::logger;
use crate::utils::size::reduction_percent;

use super::kind::minify_by_ext;

/// Process a single project-relative file into the output tree.
///
/// CSS and JS files are minified, everything else is copied verbatim. The
/// source's relative path is mirrored under the output root and any
/// existing destination file is overwritten.
pub fn process_file(rel_path: &Path, config: &BuildConfig) -> Result<()> {
    let source = config.root_join(rel_path);
    let dest = config.output_dir().join(rel_path);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let ext = source
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    if ext == "css" || ext == "js" {
        let content = fs::read_to_string(&source)
            .with_context(|| format!("Failed to read {}", source.display()))?;
        let minified = minify_by_ext(&source, &content).unwrap_or_else(|| content.clone());
        fs::write(&dest, &minified)
            .with_context(|| format!("Failed to write {}", dest.display()))?;
        logger::success(
            "assets",
            &format!(
                "minified {} ({} → {} bytes, {:.1}% smaller)",
                rel_path.display(),
                content.len(),
                minified.len(),
                reduction_percent(content.len(), minified.len()),
            ),
        );
    } else {
        let bytes = fs::copy(&source, &dest).with_context(|| {
            format!(
                "Failed to copy {} to {}",
                source.display(),
                dest.display()
            )
        })?;
        logger::success(
            "assets",
            &format!("copied {} ({bytes} bytes)", rel_path.display()),
        );
    }

    Ok(())
}
