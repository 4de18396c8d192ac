//! TypeScript client module generator for tsbind.
//!
//! Turns a resolved source model into one TypeScript module holding enum and
//! class declarations plus client functions rendered from templates.
//!
//! # Usage
//!
//! ```ignore
//! use tsbind_codegen::{LanguageCodegen, ModelIndex, ReferenceResolver};
//! use tsbind_codegen_typescript::Generator;
//! use tsbind_manifest::TsbindToml;
//!
//! let project = TsbindToml::open("tsbind.toml")?;
//! let modules = project.load_modules()?;
//! let templates = project.load_templates()?;
//!
//! let index = ModelIndex::new(&modules);
//! let resolution = ReferenceResolver::new(&index).resolve(&project.manifest().project.include)?;
//! let generator = Generator::new(&index, &resolution, &templates)?;
//!
//! generator.generate(&project.output_path())?;
//! ```

mod client;
mod generator;
mod type_mapper;

pub mod ast;

pub use client::{
    API_FUNCTIONS, ApiClient, CONTROLLER_SHORT_NAME, CONTROLLER_SUFFIX, ENDPOINT_NAME,
    ENDPOINT_PARAM_TYPE_NAME, ENDPOINT_RESPONSE_TYPE_NAME, ENDPOINT_ROUTE, Endpoint,
    compose_route, controller_route,
};
pub use generator::{GENERATED_HEADER, Generator};
pub use tsbind_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use type_mapper::TypeScriptTypeMapper;
