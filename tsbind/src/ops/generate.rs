//! Generate operation - client module generation from the source model.

use std::path::Path;

use eyre::{Context, Result};
use tsbind_codegen::{LanguageCodegen, ModelIndex, ReferenceResolver};
use tsbind_codegen_typescript::Generator;
use tsbind_ir::SourceModule;
use tsbind_manifest::Templates;

use super::Messages;
use crate::reports::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// File the client module is written to.
    pub output: &'a Path,
    /// Type names emitted even when nothing references them.
    pub include: &'a [String],
    /// Whether to preview without writing the file.
    pub dry_run: bool,
    /// Whether info diagnostics are shown.
    pub verbose: bool,
}

/// Execute the generate operation.
///
/// The module is rendered completely before anything is written, so a
/// failure leaves an existing output file untouched.
pub fn generate(
    modules: &[SourceModule],
    templates: &Templates,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let index = ModelIndex::new(modules);
    let resolution = ReferenceResolver::new(&index)
        .resolve(opts.include.iter().cloned())
        .wrap_err("Failed to resolve referenced types")?;
    let generator = Generator::new(&index, &resolution, templates)
        .wrap_err("Failed to prepare API clients")?
        .with_output_name(opts.output.display().to_string());

    let messages: Messages = index
        .diagnostics()
        .iter()
        .chain(generator.diagnostics())
        .collect();

    let enum_count = resolution
        .iter()
        .filter(|name| index.find_enum(name).is_some())
        .count();

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        let gen_result = generator
            .generate(opts.output)
            .wrap_err("Failed to generate code")?;
        GenerationResult::Written(WrittenResult {
            path: gen_result.path,
            bytes: gen_result.bytes,
        })
    };

    Ok(GenerateReport {
        warnings: messages.warnings,
        infos: if opts.verbose { messages.infos } else { Vec::new() },
        enum_count,
        class_count: resolution.len() - enum_count,
        client_count: generator.clients().len(),
        endpoint_count: generator.clients().iter().map(|c| c.endpoints.len()).sum(),
        result,
    })
}
