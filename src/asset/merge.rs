//! Bundle merging: concatenate ordered sources, minify once, write one
//! artifact.

use std::fs;

use anyhow::{Context, Result};

use crate::config::BuildConfig;
use crate::debug;
use crate::logger;
use crate::utils::size::reduction_percent;

use super::kind::BundleKind;

/// Outcome of a bundle merge, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeReport {
    /// Number of sources that existed and were merged.
    pub files_merged: usize,
    /// Aggregate byte size of the merged sources.
    pub original_bytes: usize,
    /// Byte size of the minified artifact.
    pub merged_bytes: usize,
}

/// Merge and minify one bundle into the output tree.
///
/// Sources are concatenated in declared order, separated by a newline -
/// order determines rule and statement precedence in the artifact. Absent
/// sources are skipped. Minification runs once over the full
/// concatenation, never per file.
pub fn merge_bundle(config: &BuildConfig, kind: BundleKind) -> Result<MergeReport> {
    let bundle = match kind {
        BundleKind::Css => &config.bundles.css,
        BundleKind::Js => &config.bundles.js,
    };

    let mut merged = String::new();
    let mut original_bytes = 0;
    let mut files_merged = 0;

    for source in &bundle.sources {
        let path = config.root_join(source);
        if !path.is_file() {
            debug!(kind.label(); "skipping missing source: {}", source.display());
            continue;
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read bundle source: {}", path.display()))?;
        original_bytes += content.len();
        merged.push_str(&content);
        merged.push('\n');
        files_merged += 1;
    }

    let minified = kind.minify(&merged);

    let dest = config.output_dir().join(&bundle.output);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create bundle directory: {}", parent.display()))?;
    }
    fs::write(&dest, &minified)
        .with_context(|| format!("Failed to write bundle: {}", dest.display()))?;

    let report = MergeReport {
        files_merged,
        original_bytes,
        merged_bytes: minified.len(),
    };
    logger::success(
        kind.label(),
        &format!(
            "merged {} sources: {} → {} bytes ({:.1}% smaller)",
            report.files_merged,
            report.original_bytes,
            report.merged_bytes,
            reduction_percent(report.original_bytes, report.merged_bytes),
        ),
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn config_with_root(root: &Path) -> BuildConfig {
        let mut config = BuildConfig::from_str("").unwrap();
        config.root = root.to_path_buf();
        config
    }

    #[test]
    fn test_merge_preserves_declared_order() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("styles")).unwrap();
        fs::write(dir.path().join("styles/main.css"), "a { color: red; }").unwrap();
        fs::write(dir.path().join("styles/components.css"), "b { color: blue; }").unwrap();

        let config = config_with_root(dir.path());
        let report = merge_bundle(&config, BundleKind::Css).unwrap();

        assert_eq!(report.files_merged, 2);
        let merged =
            fs::read_to_string(dir.path().join("build/styles/merged-styles.css")).unwrap();
        assert_eq!(merged, "a{color:red}b{color:blue}");
    }

    #[test]
    fn test_minification_runs_after_concatenation() {
        // A comment spanning two sources only disappears when the
        // minifier sees the full concatenation.
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("styles")).unwrap();
        fs::write(dir.path().join("styles/main.css"), "/* open").unwrap();
        fs::write(dir.path().join("styles/components.css"), "close */ a { }").unwrap();

        let config = config_with_root(dir.path());
        merge_bundle(&config, BundleKind::Css).unwrap();

        let merged =
            fs::read_to_string(dir.path().join("build/styles/merged-styles.css")).unwrap();
        assert_eq!(merged, "a{}");
    }

    #[test]
    fn test_missing_sources_skipped_silently() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("web_script_new.js"), "let a = 1 ;").unwrap();

        let config = config_with_root(dir.path());
        let report = merge_bundle(&config, BundleKind::Js).unwrap();

        assert_eq!(report.files_merged, 1);
        let merged =
            fs::read_to_string(dir.path().join("build/scripts/merged-scripts.js")).unwrap();
        assert_eq!(merged, "let a = 1;");
    }

    #[test]
    fn test_empty_bundle_writes_empty_artifact() {
        let dir = TempDir::new().unwrap();

        let config = config_with_root(dir.path());
        let report = merge_bundle(&config, BundleKind::Js).unwrap();

        assert_eq!(report.files_merged, 0);
        assert_eq!(report.original_bytes, 0);
        let merged =
            fs::read_to_string(dir.path().join("build/scripts/merged-scripts.js")).unwrap();
        assert_eq!(merged, "");
    }
}
