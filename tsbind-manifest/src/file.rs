use std::path::{Path, PathBuf};

use tsbind_ir::SourceModule;

use crate::{Manifest, Result, Templates, error::read_to_string, source::load_modules};

/// Starter manifest written by `tsbind init`.
pub const DEFAULT_MANIFEST: &str = include_str!("../templates/tsbind.toml");

/// An opened tsbind.toml: where it lives and what it says.
///
/// Relative paths in the manifest are resolved against the directory that
/// contains the file.
#[derive(Debug)]
pub struct TsbindToml {
    path: PathBuf,
    manifest: Manifest,
}

impl TsbindToml {
    /// Open and parse a tsbind.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = read_to_string(&path)?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, manifest })
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory the manifest lives in.
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Resolve a manifest-relative path.
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.base_dir().join(relative)
    }

    /// Absolute location of the generated client module.
    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.manifest.project.output)
    }

    /// Load every source module listed in `inputs`, in order.
    pub fn load_modules(&self) -> Result<Vec<SourceModule>> {
        load_modules(self.manifest.project.inputs.iter().map(|p| self.resolve(p)))
    }

    /// Load the configured templates.
    pub fn load_templates(&self) -> Result<Templates> {
        let config = &self.manifest.templates;
        let general = config.general.as_deref().map(|p| self.resolve(p));
        Templates::load(
            general.as_deref(),
            &self.resolve(&config.controller),
            &self.resolve(&config.endpoint),
        )
    }
}
