//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from client module generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Warning messages from the index and the emitter.
    pub warnings: Vec<String>,

    /// Info messages, empty unless requested.
    pub infos: Vec<String>,

    /// Number of emitted enums.
    pub enum_count: usize,

    /// Number of emitted classes.
    pub class_count: usize,

    /// Number of emitted client blocks.
    pub client_count: usize,

    /// Number of emitted endpoint functions.
    pub endpoint_count: usize,

    /// Generation result (file written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The module was written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when the module was written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub path: PathBuf,
    pub bytes: usize,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.info(info);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn summary(&self) -> String {
        format!(
            "{} enum{}, {} class{}, {} client{} ({} endpoint{})",
            self.enum_count,
            plural(self.enum_count, "s"),
            self.class_count,
            plural(self.class_count, "es"),
            self.client_count,
            plural(self.client_count, "s"),
            self.endpoint_count,
            plural(self.endpoint_count, "s"),
        )
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value(
            "Generated",
            &format!("{} ({} bytes)", written.path.display(), written.bytes),
        );
        out.preformatted(&format!("  {}", self.summary()));
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&self.summary());
    }
}

fn plural(count: usize, suffix: &'static str) -> &'static str {
    if count == 1 { "" } else { suffix }
}
