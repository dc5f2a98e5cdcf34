//! Asset kind definitions and minifier dispatch.

use std::path::Path;

use super::minify::{minify_css, minify_js};

/// Kind of mergeable asset bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleKind {
    /// Stylesheet bundle.
    Css,
    /// Script bundle.
    Js,
}

impl BundleKind {
    /// Module label used in log output.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Js => "js",
        }
    }

    /// Run the matching minifier over `source`.
    pub fn minify(self, source: &str) -> String {
        match self {
            Self::Css => minify_css(source),
            Self::Js => minify_js(source),
        }
    }
}

/// Minify content based on file extension.
///
/// Returns `Some(minified)` for css/js files, `None` for everything else.
pub fn minify_by_ext(path: &Path, content: &str) -> Option<String> {
    match path.extension()?.to_str()? {
        "css" => Some(minify_css(content)),
        "js" => Some(minify_js(content)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_by_ext_dispatch() {
        assert_eq!(
            minify_by_ext(Path::new("a.css"), "a { }"),
            Some("a{}".to_string())
        );
        assert_eq!(
            minify_by_ext(Path::new("a.js"), "f ( ) ;"),
            Some("f();".to_string())
        );
        assert_eq!(minify_by_ext(Path::new("a.html"), "<html>"), None);
        assert_eq!(minify_by_ext(Path::new("no_extension"), ""), None);
    }
}
