//! Build orchestration.
//!
//! Pipeline phases:
//! - **Clean** - recreate the output tree from scratch
//! - **Merge** - concatenate and minify the CSS and JS bundles
//! - **Entries** - copy HTML entry files into the output tree
//! - **Rewrite** - point HTML references at the merged bundles
//! - **Pages** - copy the auxiliary pages tree verbatim
//! - **Finalize** - ensure the scripts area exists, report elapsed time

use std::{fs, time::Instant};

use anyhow::Result;

use crate::asset::{BundleKind, merge_bundle, process_file};
use crate::config::BuildConfig;
use crate::html;
use crate::utils::fs::{copy_dir_recursive, prepare_output_dir};
use crate::{log, logger};

/// Run the full build pipeline.
///
/// Steps run strictly in sequence. An error aborts the remaining steps
/// and leaves the output tree in whatever partial state it reached; there
/// is no rollback.
pub fn run_build(config: &BuildConfig) -> Result<()> {
    let start = Instant::now();
    log!("build"; "building static assets");

    prepare_output_dir(&config.output_dir(), &config.build.subdirs)?;

    merge_bundle(config, BundleKind::Css)?;
    merge_bundle(config, BundleKind::Js)?;

    process_html_entries(config)?;
    html::rewrite_references(config)?;
    copy_pages(config)?;

    // Output contract: the scripts area exists even if the JS bundle step
    // is reconfigured away from it
    if let Some(parent) = config.bundles.js.output.parent() {
        fs::create_dir_all(config.output_dir().join(parent))?;
    }

    log!("build"; "done in {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}

/// Copy each HTML entry into the output tree, warning on missing files.
fn process_html_entries(config: &BuildConfig) -> Result<()> {
    for entry in &config.build.html {
        if config.root_join(entry).is_file() {
            process_file(entry, config)?;
        } else {
            logger::warning(&format!("missing file: {}", entry.display()));
        }
    }
    Ok(())
}

/// Copy the auxiliary pages tree verbatim, if present.
fn copy_pages(config: &BuildConfig) -> Result<()> {
    let pages = config.root_join(&config.build.pages);
    if !pages.is_dir() {
        return Ok(());
    }

    let dest = config.output_dir().join(&config.build.pages);
    let count = copy_dir_recursive(&pages, &dest)?;
    logger::success(
        "pages",
        &format!("copied {} ({count} files)", config.build.pages.display()),
    );
    Ok(())
}
