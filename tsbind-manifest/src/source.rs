//! Loading source modules produced by the model extractor.

use std::path::Path;

use tsbind_ir::SourceModule;

use crate::{
    Result,
    error::{SourceContext, read_to_string},
};

/// Parse a source module from JSON text.
///
/// `filename` is used for error reporting and recorded as the module path
/// when the document does not carry one.
pub fn parse_module(content: &str, filename: &str) -> Result<SourceModule> {
    let ctx = SourceContext::new(content, filename);
    let mut module: SourceModule =
        serde_json::from_str(ctx.src()).map_err(|e| ctx.model_error(e))?;

    if module.path.is_none() {
        module.path = Some(filename.to_string());
    }
    Ok(module)
}

/// Load a single source module file.
pub fn load_module(path: impl AsRef<Path>) -> Result<SourceModule> {
    let path = path.as_ref();
    let content = read_to_string(path)?;
    parse_module(&content, &path.display().to_string())
}

/// Load source module files, preserving input order.
pub fn load_modules<P: AsRef<Path>>(
    paths: impl IntoIterator<Item = P>,
) -> Result<Vec<SourceModule>> {
    paths.into_iter().map(|p| load_module(p)).collect()
}
