//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for language code generators
//! - [`TypeMapper`] - Source type name to target type name translation
//! - [`GenerateResult`] / [`PreviewFile`] - What a generator produced

use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for language-specific code generators.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "ts")
    fn file_extension(&self) -> &'static str;

    /// Render generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Write the generated module to `output`
    fn generate(&self, output: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug)]
pub struct GenerateResult {
    /// File that was written
    pub path: PathBuf,
    /// Size of the written file in bytes
    pub bytes: usize,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Output path as configured
    pub path: String,
    /// File content
    pub content: String,
}

/// Translates raw source type expressions into target-language type names.
///
/// Implementations must be total: every input maps to some output.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a raw source type expression (e.g. `"List<int>"`)
    fn map_type_name(&self, raw: &str) -> String;
}
