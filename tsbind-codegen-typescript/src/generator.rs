//! TypeScript client module generator.

use std::path::Path;

use eyre::{Context, Result};
use tsbind_codegen::{
    CodeBuilder, Diagnostic, Indent, LanguageCodegen, ModelIndex, Renderable, Resolution,
    TypeNameError,
    language::{GenerateResult, PreviewFile},
};
use tsbind_core::File;
use tsbind_manifest::Templates;

use crate::{
    TypeScriptTypeMapper,
    ast::{Class, Enum},
    client::ApiClient,
};

/// First line of every generated module.
pub const GENERATED_HEADER: &str = "/* This file was automatically generated by tsbind */";

const DEFAULT_OUTPUT_NAME: &str = "api.ts";

/// Generates a single TypeScript module from a resolved model.
///
/// The module contains, in order: the header, the general template, one enum
/// per resolved enum, one class per resolved class, and one client block per
/// routed controller.
pub struct Generator<'a> {
    index: &'a ModelIndex<'a>,
    resolution: &'a Resolution,
    templates: &'a Templates,
    type_mapper: TypeScriptTypeMapper,
    clients: Vec<ApiClient>,
    diagnostics: Vec<Diagnostic>,
    output_name: String,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        vec![PreviewFile {
            path: self.output_name.clone(),
            content: self.render(),
        }]
    }

    fn generate(&self, output: &Path) -> Result<GenerateResult> {
        let content = self.render();
        File::new(output, content.as_str())
            .write()
            .wrap_err_with(|| format!("Failed to write {}", output.display()))?;

        Ok(GenerateResult {
            path: output.to_path_buf(),
            bytes: content.len(),
        })
    }
}

impl<'a> Generator<'a> {
    /// Prepare a generator.
    ///
    /// Controller clients are built here, so a malformed return type on a
    /// routed endpoint fails before anything is rendered.
    pub fn new(
        index: &'a ModelIndex<'a>,
        resolution: &'a Resolution,
        templates: &'a Templates,
    ) -> std::result::Result<Self, TypeNameError> {
        let mut diagnostics = Vec::new();
        let mut clients = Vec::new();
        for controller in index.controllers() {
            if let Some(client) = ApiClient::from_controller(controller, &mut diagnostics)? {
                clients.push(client);
            }
        }

        Ok(Self {
            index,
            resolution,
            templates,
            type_mapper: TypeScriptTypeMapper,
            clients,
            diagnostics,
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
        })
    }

    /// Name reported for the module in previews.
    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = name.into();
        self
    }

    /// Clients that will be emitted, in controller discovery order.
    pub fn clients(&self) -> &[ApiClient] {
        &self.clients
    }

    /// Methods and controllers skipped while building clients.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Render the complete module.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new(Indent::Tab);

        builder.push_line(GENERATED_HEADER).push_blank();

        if let Some(general) = self.general_template() {
            builder.push_text(general).push_blank();
        }

        let enums: Vec<Enum> = self
            .resolution
            .iter()
            .filter_map(|name| self.index.find_enum(name))
            .map(Enum::from)
            .collect();
        push_section(&mut builder, &enums);

        let classes: Vec<Class> = self
            .resolution
            .iter()
            .filter_map(|name| self.index.find_class(name))
            .map(|class| Class::from_source(class, &self.type_mapper))
            .collect();
        push_section(&mut builder, &classes);

        for (i, client) in self.clients.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            builder.push_text(&client.render(self.templates));
        }

        builder.build()
    }

    fn general_template(&self) -> Option<&str> {
        self.templates
            .general
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// Emit blocks separated by blank lines, followed by one blank line.
///
/// An empty section emits nothing, not even its trailing blank line.
fn push_section<R: Renderable>(builder: &mut CodeBuilder, nodes: &[R]) {
    if nodes.is_empty() {
        return;
    }
    builder.emit_separated(nodes).push_blank();
}

#[cfg(test)]
mod tests {
    use tsbind_codegen::ReferenceResolver;
    use tsbind_ir::{
        API_CONTROLLER_ATTRIBUTE, Attribute, ROUTE_ATTRIBUTE, SourceClass, SourceEnum,
        SourceMethod, SourceModule,
    };

    use super::*;

    fn templates() -> Templates {
        Templates::new(
            "export namespace {CONTROLLER_SHORT_NAME}Api {\n{API_FUNCTIONS}\n}\n",
            "\texport const {ENDPOINT_NAME} = \"{ENDPOINT_ROUTE}\";\n",
        )
    }

    fn controller(name: &str, route: Option<&str>) -> SourceClass {
        let class = SourceClass::new(name).with_attribute(Attribute::new(API_CONTROLLER_ATTRIBUTE));
        match route {
            Some(r) => class.with_attribute(Attribute::new(ROUTE_ATTRIBUTE).arg(r)),
            None => class,
        }
    }

    fn routed(name: &str, route: &str) -> SourceMethod {
        SourceMethod::new(name, "void")
            .param("int")
            .attribute(Attribute::new(ROUTE_ATTRIBUTE).arg(route))
    }

    fn render(modules: &[SourceModule], seeds: &[&str], templates: &Templates) -> String {
        let index = ModelIndex::new(modules);
        let resolution = ReferenceResolver::new(&index)
            .resolve(seeds.iter().copied())
            .unwrap();
        Generator::new(&index, &resolution, templates).unwrap().render()
    }

    #[test]
    fn test_header_only() {
        let out = render(&[], &[], &templates());
        assert_eq!(out, format!("{GENERATED_HEADER}\n\n"));
    }

    #[test]
    fn test_general_template_block() {
        let templates = templates().with_general("// prelude\n\n");
        let out = render(&[], &[], &templates);
        assert_eq!(out, format!("{GENERATED_HEADER}\n\n// prelude\n\n"));
    }

    #[test]
    fn test_blank_general_template_is_skipped() {
        let templates = templates().with_general("\n  \n");
        let out = render(&[], &[], &templates);
        assert_eq!(out, format!("{GENERATED_HEADER}\n\n"));
    }

    #[test]
    fn test_sections_follow_resolution_order() {
        let modules = vec![
            SourceModule::new()
                .enumeration(SourceEnum::new("A").member("X", "0"))
                .enumeration(SourceEnum::new("B").member("Y", "1"))
                .class(SourceClass::new("C").property("Flag", "bool")),
        ];

        let out = render(&modules, &["B", "C", "A"], &templates());

        assert_eq!(
            out,
            format!(
                "{GENERATED_HEADER}\n\n\
                 export enum B {{\n\tY = 1,\n}}\n\n\
                 export enum A {{\n\tX = 0,\n}}\n\n\
                 export class C {{\n\tpublic Flag?: boolean;\n}}\n\n"
            )
        );
    }

    #[test]
    fn test_empty_enum_section_adds_no_blank_line() {
        let modules =
            vec![SourceModule::new().class(SourceClass::new("Order").property("Id", "int"))];

        let out = render(&modules, &["Order"], &templates());

        assert_eq!(
            out,
            format!("{GENERATED_HEADER}\n\nexport class Order {{\n\tpublic Id?: number;\n}}\n\n")
        );
    }

    #[test]
    fn test_controllers_separated_by_blank_line() {
        let modules = vec![
            SourceModule::new()
                .class(
                    controller("UsersController", Some("\"[controller]\""))
                        .method(routed("Get", "\"{id}\"")),
                )
                .class(controller("HealthController", None).method(routed("Ping", "\"ping\"")))
                .class(
                    controller("OrdersController", Some("\"[controller]\""))
                        .method(routed("Get", "\"{id}\"")),
                ),
        ];
        let index = ModelIndex::new(&modules);
        let resolution = ReferenceResolver::new(&index)
            .resolve(Vec::<String>::new())
            .unwrap();
        let templates = templates();
        let generator = Generator::new(&index, &resolution, &templates).unwrap();

        assert_eq!(generator.clients().len(), 2);
        assert_eq!(generator.diagnostics().len(), 1);
        assert_eq!(
            generator.render(),
            format!(
                "{GENERATED_HEADER}\n\n\
                 export namespace UsersApi {{\n\texport const Get = \"Users/{{id}}\";\n}}\n\n\
                 export namespace OrdersApi {{\n\texport const Get = \"Orders/{{id}}\";\n}}\n"
            )
        );
    }

    #[test]
    fn test_preview_and_generate() {
        let temp = tempfile::TempDir::new().unwrap();
        let modules = vec![SourceModule::new().enumeration(SourceEnum::new("Status"))];
        let index = ModelIndex::new(&modules);
        let resolution = ReferenceResolver::new(&index).resolve(["Status"]).unwrap();
        let templates = templates();
        let generator = Generator::new(&index, &resolution, &templates)
            .unwrap()
            .with_output_name("web/api.ts");

        let preview = generator.preview();
        assert_eq!(preview.len(), 1);
        assert_eq!(preview[0].path, "web/api.ts");

        let output = temp.path().join("web").join("api.ts");
        let result = generator.generate(&output).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, preview[0].content);
        assert_eq!(result.bytes, written.len());
        assert_eq!(generator.language(), "typescript");
        assert_eq!(generator.file_extension(), "ts");
    }
}
