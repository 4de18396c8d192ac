//! Type resolution and code generation utilities for tsbind.
//!
//! This crate holds the language-agnostic half of the pipeline. Language
//! backends (e.g. `tsbind-codegen-typescript`) build on it.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`collections`] - Insertion-ordered set used for the closure
//! - [`lookup`] - Name-keyed index over the source model
//! - [`typename`] - Source type-name utilities (wrapper stripping)
//! - [`resolve`] - Reference closure computation
//! - [`template`] - Placeholder substitution for text templates
//! - [`diagnostic`] - Notes collected while generating
//! - [`language`] - Language-specific abstractions (LanguageCodegen, TypeMapper)

pub mod builder;
pub mod collections;
pub mod diagnostic;
pub mod language;
pub mod lookup;
pub mod resolve;
pub mod template;
pub mod typename;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use collections::OrderedSet;
pub use diagnostic::{Diagnostic, Severity};
pub use language::{GenerateResult, LanguageCodegen, PreviewFile, TypeMapper};
pub use lookup::{ModelIndex, TypeKind};
pub use resolve::{ReferenceResolver, Resolution};
pub use template::{Substitutions, Template};
pub use typename::{TypeNameError, WRAPPER_TYPES, strip_generic_type, strip_return_type_name};
