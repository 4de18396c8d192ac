//! Project manifest, source model and template loading for tsbind.
//!
//! - [`TsbindToml`] / [`Manifest`] - the `tsbind.toml` project file
//! - [`load_modules`] - source modules serialized as JSON by the extractor
//! - [`Templates`] - the three text templates the emitter renders

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod manifest;
mod source;
mod templates;

pub use error::{Error, Result, SourceContext};
pub use file::{DEFAULT_MANIFEST, TsbindToml};
pub use manifest::{Manifest, ProjectConfig, TemplatesConfig};
pub use source::{load_module, load_modules, parse_module};
pub use templates::Templates;
