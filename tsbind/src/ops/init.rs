//! Init operation - project scaffolding.

use std::path::Path;

use eyre::{Context, Result};
use tsbind_core::{File, WriteResult};
use tsbind_manifest::{DEFAULT_MANIFEST, Templates};

use crate::reports::InitReport;

/// Write `tsbind.toml` and the built-in templates into `dir`.
///
/// Files that already exist are left untouched.
pub fn init(dir: &Path) -> Result<InitReport> {
    let templates = Templates::builtin();
    let mut files = vec![File::if_missing(dir.join("tsbind.toml"), DEFAULT_MANIFEST)];
    if let Some(general) = &templates.general {
        files.push(File::if_missing(
            dir.join("templates").join("general.ts"),
            general.as_str(),
        ));
    }
    files.push(File::if_missing(
        dir.join("templates").join("controller.ts"),
        templates.controller.as_str(),
    ));
    files.push(File::if_missing(
        dir.join("templates").join("endpoint.ts"),
        templates.endpoint.as_str(),
    ));

    let mut report = InitReport {
        dir: dir.to_path_buf(),
        created: Vec::new(),
        skipped: Vec::new(),
    };
    for file in &files {
        let display = file
            .path()
            .strip_prefix(dir)
            .unwrap_or(file.path())
            .display()
            .to_string();
        match file
            .write()
            .wrap_err_with(|| format!("Failed to write {}", file.path().display()))?
        {
            WriteResult::Written => report.created.push(display),
            WriteResult::Skipped => report.skipped.push(display),
        }
    }

    Ok(report)
}
