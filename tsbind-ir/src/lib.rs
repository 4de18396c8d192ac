//! Source model types for the tsbind TypeScript client generator.
//!
//! This crate defines the structured view of an API surface that the code
//! generation pipeline consumes: classes, enums, their members and the
//! annotations attached to them.
//!
//! # Architecture
//!
//! ```text
//! extractor (JSON) → tsbind-manifest (loading) → tsbind-ir (model) → codegen
//! ```
//!
//! The model is read-only once built. Type names are kept exactly as they
//! appear in the source (e.g. `"List<Order>"`, `"int?"`); every translation
//! happens on copies inside the code generators.

mod attribute;
mod model;

pub use attribute::{
    API_CONTROLLER_ATTRIBUTE, Attribute, AttributeArgument, CONTROLLER_PLACEHOLDER,
    ROUTE_ATTRIBUTE,
};
pub use model::{EnumMember, Member, SourceClass, SourceEnum, SourceMethod, SourceModule};
