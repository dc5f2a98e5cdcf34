//! Build configuration management for `sitepack.toml`.
//!
//! # Sections
//!
//! | Section         | Purpose                                         |
//! |-----------------|-------------------------------------------------|
//! | `[build]`       | Output root, pre-created subdirs, HTML entries  |
//! | `[bundles.css]` | Ordered stylesheet sources + artifact path      |
//! | `[bundles.js]`  | Ordered script sources + artifact path          |
//!
//! The config file is optional: the defaults describe the standard small
//! multi-page site layout, so a project with that layout needs no file at
//! all.

mod bundle;
mod error;

pub use bundle::{BuildSection, BundleConfig, BundlesSection};
pub use error::ConfigError;

use crate::cli::Cli;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing sitepack.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BuildConfig {
    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Output tree layout and HTML entry files
    pub build: BuildSection,

    /// Merged artifacts per asset kind
    pub bundles: BundlesSection,
}

impl BuildConfig {
    /// Load configuration from CLI arguments.
    ///
    /// A missing config file is not an error: defaults apply. The project
    /// root is the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config_path = cwd.join(&cli.config);

        let mut config = if config_path.is_file() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(cwd);

        // CLI overrides
        if let Some(output) = &cli.output {
            config.build.output = output.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Validate configured paths.
    ///
    /// Artifact and entry paths live inside the output tree, so they must
    /// be relative and non-empty.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.build.output.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "build.output must not be empty".into(),
            ));
        }

        for (name, bundle) in [
            ("bundles.css", &self.bundles.css),
            ("bundles.js", &self.bundles.js),
        ] {
            if bundle.output.as_os_str().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{name}.output must not be empty"
                )));
            }
            if bundle.output.is_absolute() {
                return Err(ConfigError::Validation(format!(
                    "{name}.output must be relative to the output root: {}",
                    bundle.output.display()
                )));
            }
        }

        for entry in &self.build.html {
            if entry.is_absolute() {
                return Err(ConfigError::Validation(format!(
                    "build.html entries must be relative to the project root: {}",
                    entry.display()
                )));
            }
        }

        Ok(())
    }

    /// Resolve a project-relative path against the root.
    pub fn root_join(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Absolute path of the output root.
    pub fn output_dir(&self) -> PathBuf {
        self.root_join(&self.build.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BuildConfig::from_str("").unwrap();
        assert_eq!(config.build.output, PathBuf::from("build"));
        assert_eq!(
            config.build.html,
            vec![PathBuf::from("index.html"), PathBuf::from("login.html")]
        );
        assert_eq!(config.bundles.css.sources.len(), 4);
        assert_eq!(
            config.bundles.css.output,
            PathBuf::from("styles/merged-styles.css")
        );
        assert_eq!(config.bundles.js.sources.len(), 5);
        assert_eq!(
            config.bundles.js.output,
            PathBuf::from("scripts/merged-scripts.js")
        );
    }

    #[test]
    fn test_bundle_override_keeps_other_defaults() {
        let config = BuildConfig::from_str(
            r#"
[bundles.css]
sources = ["a.css", "b.css"]
output = "css/site.css"
"#,
        )
        .unwrap();
        assert_eq!(
            config.bundles.css.sources,
            vec![PathBuf::from("a.css"), PathBuf::from("b.css")]
        );
        assert_eq!(config.bundles.css.output, PathBuf::from("css/site.css"));
        // js bundle keeps its defaults
        assert_eq!(config.bundles.js.sources.len(), 5);
    }

    #[test]
    fn test_build_section_override() {
        let config = BuildConfig::from_str("[build]\noutput = \"dist\"\nhtml = [\"app.html\"]")
            .unwrap();
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert_eq!(config.build.html, vec![PathBuf::from("app.html")]);
        // untouched fields keep defaults
        assert_eq!(config.build.pages, PathBuf::from("pages"));
    }

    #[test]
    fn test_absolute_bundle_output_rejected() {
        let mut config = BuildConfig::from_str("").unwrap();
        config.bundles.js.output = PathBuf::from("/etc/merged.js");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_root_join() {
        let mut config = BuildConfig::from_str("").unwrap();
        config.root = PathBuf::from("/project");
        assert_eq!(
            config.root_join(Path::new("styles/main.css")),
            PathBuf::from("/project/styles/main.css")
        );
        assert_eq!(config.output_dir(), PathBuf::from("/project/build"));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        assert!(matches!(
            BuildConfig::from_str("[build\noutput = 1"),
            Err(ConfigError::Toml(_))
        ));
    }
}
