//! HTML reference rewriting.
//!
//! Strips existing stylesheet/script tags from the HTML entry files in
//! the output tree and inserts single references to the merged bundles.
//! Pattern-based, not a markup parse: tags with unusual formatting (a
//! different attribute order, unquoted attributes) do not match and are
//! left in place.

use std::{fs, path::Path, sync::LazyLock};

use anyhow::{Context, Result};
use regex::{Captures, Regex};

use crate::config::BuildConfig;
use crate::logger;

static CSS_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<link\s+rel=["']stylesheet["']\s+href=["'][^"']+\.css["']\s*>"#).unwrap()
});

static JS_SCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<script\s+src=["'][^"']+\.js["']\s*></script>"#).unwrap());

static HEAD_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(<head>)(.*?)(</head>)").unwrap());

/// Rewrite bundle references in every configured HTML entry present in
/// the output tree.
///
/// Entries missing from the output are skipped - the processing step
/// already warned about them.
pub fn rewrite_references(config: &BuildConfig) -> Result<()> {
    let css_href = href(&config.bundles.css.output);
    let js_href = href(&config.bundles.js.output);
    let output_dir = config.output_dir();

    for entry in &config.build.html {
        let path = output_dir.join(entry);
        if !path.is_file() {
            continue;
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let rewritten = rewrite_html(&content, &css_href, &js_href);
        fs::write(&path, rewritten)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        logger::success(
            "html",
            &format!("rewrote bundle references: {}", entry.display()),
        );
    }
    Ok(())
}

/// Pure text rewrite: remove existing stylesheet/script references, then
/// insert one stylesheet link as the last element before `</head>` and
/// one script tag before `</body>`.
pub fn rewrite_html(content: &str, css_href: &str, js_href: &str) -> String {
    let content = CSS_LINK.replace_all(content, "");
    let content = JS_SCRIPT.replace_all(&content, "");

    let content = HEAD_SPAN.replace(&content, |caps: &Captures| {
        format!(
            "{}{}\n    <link rel=\"stylesheet\" href=\"{css_href}\">\n    {}",
            &caps[1], &caps[2], &caps[3]
        )
    });

    match content.find("</body>") {
        Some(pos) => format!(
            "{}\n    <script src=\"{js_href}\"></script>\n{}",
            &content[..pos],
            &content[pos..]
        ),
        None => content.into_owned(),
    }
}

/// Forward-slash href for a bundle output path, for HTML attributes.
fn href(path: &Path) -> String {
    path.iter()
        .map(|c| c.to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
