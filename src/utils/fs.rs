//! Filesystem helpers for the output tree.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// Reset the output root to a clean slate.
///
/// Removes the directory recursively if it exists, recreates it, then
/// creates the fixed subdirectories. Artifacts from previous runs never
/// survive.
pub fn prepare_output_dir(output: &Path, subdirs: &[PathBuf]) -> Result<()> {
    if output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;

    for subdir in subdirs {
        fs::create_dir_all(output.join(subdir))?;
    }
    Ok(())
}

/// Recursively copy a directory tree, overwriting existing destination
/// files. Returns the number of files copied.
pub fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<usize> {
    fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create destination directory: {}", dest.display()))?;

    let mut count = 0;
    for entry in fs::read_dir(src)
        .with_context(|| format!("Failed to read source directory: {}", src.display()))?
    {
        let entry = entry?;
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if src_path.is_dir() {
            count += copy_dir_recursive(&src_path, &dest_path)?;
        } else {
            fs::copy(&src_path, &dest_path).with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    src_path.display(),
                    dest_path.display()
                )
            })?;
            count += 1;
        }
    }
    Ok(count)
}
