//! Configuration sections for `sitepack.toml`.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "build"
//! html = ["index.html", "login.html"]
//!
//! [bundles.css]
//! sources = ["styles/main.css", "web_style.css"]
//! output = "styles/merged-styles.css"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section: output tree layout and HTML entry files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// Output root, recreated from scratch on every run.
    pub output: PathBuf,
    /// Subdirectories created inside the output root before processing.
    pub subdirs: Vec<PathBuf>,
    /// Top-level HTML entry files, copied into the output tree and then
    /// rewritten to reference the merged bundles. Missing entries produce
    /// a warning, not an error.
    pub html: Vec<PathBuf>,
    /// Auxiliary pages directory copied verbatim into the output tree.
    pub pages: PathBuf,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            output: PathBuf::from("build"),
            subdirs: vec!["styles".into(), "utils".into(), "pages".into()],
            html: vec!["index.html".into(), "login.html".into()],
            pages: PathBuf::from("pages"),
        }
    }
}

/// `[bundles]` section: one merged artifact per asset kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BundlesSection {
    /// Stylesheet bundle.
    #[serde(default = "BundleConfig::default_css")]
    pub css: BundleConfig,
    /// Script bundle.
    #[serde(default = "BundleConfig::default_js")]
    pub js: BundleConfig,
}

impl Default for BundlesSection {
    fn default() -> Self {
        Self {
            css: BundleConfig::default_css(),
            js: BundleConfig::default_js(),
        }
    }
}

/// A single merged artifact: an ordered source list and its destination.
///
/// Source order is significant: it determines rule/statement precedence in
/// the merged artifact. Sources that do not exist are skipped silently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleConfig {
    /// Source files, concatenated in declared order.
    pub sources: Vec<PathBuf>,
    /// Artifact path relative to the output root.
    pub output: PathBuf,
}

impl BundleConfig {
    fn default_css() -> Self {
        Self {
            sources: vec![
                "styles/main.css".into(),
                "styles/components.css".into(),
                "styles/index-styles.css".into(),
                "web_style.css".into(),
            ],
            output: PathBuf::from("styles/merged-styles.css"),
        }
    }

    fn default_js() -> Self {
        Self {
            sources: vec![
                "utils/api.js".into(),
                "utils/validation.js".into(),
                "utils/taskManager.js".into(),
                "scripts/app.js".into(),
                "web_script_new.js".into(),
            ],
            output: PathBuf::from("scripts/merged-scripts.js"),
        }
    }
}
