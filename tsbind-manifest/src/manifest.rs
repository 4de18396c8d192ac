//! Manifest types and parsing for tsbind.toml files.

use std::{path::PathBuf, str::FromStr};

use serde::Deserialize;

use crate::{Result, error::SourceContext};

/// Root manifest for tsbind.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Inputs, output and always-included types
    pub project: ProjectConfig,

    /// Template locations
    #[serde(default)]
    pub templates: TemplatesConfig,
}

/// The `[project]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Generated client module, relative to the manifest
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Source model files, in lookup order
    pub inputs: Vec<PathBuf>,

    /// Type names emitted even when no controller references them
    #[serde(default)]
    pub include: Vec<String>,
}

/// The `[templates]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplatesConfig {
    pub general: Option<PathBuf>,
    #[serde(default = "default_controller_template")]
    pub controller: PathBuf,
    #[serde(default = "default_endpoint_template")]
    pub endpoint: PathBuf,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            general: None,
            controller: default_controller_template(),
            endpoint: default_endpoint_template(),
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("src/api.ts")
}

fn default_controller_template() -> PathBuf {
    PathBuf::from("templates/controller.ts")
}

fn default_endpoint_template() -> PathBuf {
    PathBuf::from("templates/endpoint.ts")
}

impl Manifest {
    /// Parse a manifest with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        manifest.validate(&ctx)?;
        Ok(manifest)
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        if self.project.inputs.is_empty() {
            return Err(ctx.validation_error_near(
                "at least one source model file must be listed in `inputs`",
                "inputs",
            ));
        }
        Ok(())
    }
}

impl FromStr for Manifest {
    type Err = Box<crate::Error>;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_str_with_filename(s, "tsbind.toml")
    }
}
