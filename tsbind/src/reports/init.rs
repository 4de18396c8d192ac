//! Init command report data structures.

use std::path::{Path, PathBuf};

use super::output::{Output, Report};

/// Report data from project scaffolding.
#[derive(Debug)]
pub struct InitReport {
    /// Project directory.
    pub dir: PathBuf,
    /// Files written, relative to `dir`.
    pub created: Vec<String>,
    /// Files left alone because they already existed.
    pub skipped: Vec<String>,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        if !self.created.is_empty() {
            out.section(&format!("Created in {}", self.dir.display()));
            for file in &self.created {
                out.added_item(file);
            }
        }

        if !self.skipped.is_empty() {
            if !self.created.is_empty() {
                out.newline();
            }
            out.section("Already present");
            for file in &self.skipped {
                out.list_item(file);
            }
        }

        out.newline();
        out.section("Next steps");
        if self.dir != Path::new(".") {
            out.preformatted(&format!("  cd {}", self.dir.display()));
        }
        out.preformatted("  export your model to model/api.json");
        out.preformatted("  tsbind generate");
    }
}
