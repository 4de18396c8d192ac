//! TypeScript class builder.

use tsbind_codegen::{CodeFragment, Renderable, TypeMapper};
use tsbind_ir::SourceClass;

/// A public field of a TypeScript class.
#[derive(Debug, Clone)]
pub struct ClassField {
    pub name: String,
    pub ty: String,
}

/// An exported TypeScript class made of public fields.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    fields: Vec<ClassField>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field; every field is emitted optional (`name?: type`).
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(ClassField {
            name: name.into(),
            ty: ty.into(),
        });
        self
    }

    /// Build from a source class: every property becomes an optional field
    /// typed through `mapper`. Source fields are not emitted.
    pub fn from_source(source: &SourceClass, mapper: &impl TypeMapper) -> Self {
        source.properties.iter().fold(Self::new(&source.name), |c, p| {
            c.field(&p.name, mapper.map_type_name(&p.type_name))
        })
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self
            .fields
            .iter()
            .map(|field| CodeFragment::line(format!("public {}?: {};", field.name, field.ty)))
            .collect();

        vec![CodeFragment::braced(
            format!("export class {} {{", self.name),
            body,
        )]
    }
}
