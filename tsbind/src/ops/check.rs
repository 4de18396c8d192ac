//! Check operation - model resolution without writing.

use std::path::Path;

use tsbind_codegen::{Diagnostic, ModelIndex, ReferenceResolver, TypeKind, TypeNameError};
use tsbind_codegen_typescript::Generator;
use tsbind_ir::SourceModule;
use tsbind_manifest::Templates;

use super::Messages;
use crate::reports::{CheckReport, ClientSummary, ResolvedType};

const PHASE: &str = "resolve";

/// Execute the check operation.
///
/// Resolves the model exactly as `generate` would and reports the emitted
/// types, the filtered names, the clients and every diagnostic. A malformed
/// return type is reported as an error diagnostic instead of aborting.
pub fn check(modules: &[SourceModule], include: &[String], config_path: &Path) -> CheckReport {
    let index = ModelIndex::new(modules);
    let mut report = CheckReport {
        config_path: config_path.to_path_buf(),
        model_classes: index.class_count(),
        model_enums: index.enum_count(),
        errors: Vec::new(),
        warnings: Vec::new(),
        infos: Vec::new(),
        types: Vec::new(),
        filtered: Vec::new(),
        clients: Vec::new(),
    };

    let resolution = match ReferenceResolver::new(&index).resolve(include.iter().cloned()) {
        Ok(resolution) => resolution,
        Err(err) => return failed(report, &index, err),
    };

    // Clients do not depend on template text
    let templates = Templates::new("", "");
    let generator = match Generator::new(&index, &resolution, &templates) {
        Ok(generator) => generator,
        Err(err) => return failed(report, &index, err),
    };

    let messages: Messages = index
        .diagnostics()
        .iter()
        .chain(generator.diagnostics())
        .collect();
    report.errors = messages.errors;
    report.warnings = messages.warnings;
    report.infos = messages.infos;

    report.types = resolution
        .iter()
        .filter_map(|name| {
            index.kind(name).map(|kind| ResolvedType {
                name: name.to_string(),
                kind: match kind {
                    TypeKind::Class => "class",
                    TypeKind::Enum => "enum",
                },
            })
        })
        .collect();
    report.filtered = resolution.unresolved().iter().map(str::to_string).collect();

    report.clients = generator
        .clients()
        .iter()
        .map(|client| ClientSummary {
            name: format!("{}Api", client.short_name),
            route: client.route.clone(),
            endpoints: client.endpoints.len(),
        })
        .collect();

    report
}

/// Report the index diagnostics followed by `err` as an error.
fn failed(mut report: CheckReport, index: &ModelIndex, err: TypeNameError) -> CheckReport {
    let error = Diagnostic::error(PHASE, err.to_string());
    let messages: Messages = index.diagnostics().iter().chain([&error]).collect();
    report.errors = messages.errors;
    report.warnings = messages.warnings;
    report.infos = messages.infos;
    report
}
