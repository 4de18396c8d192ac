//! Text templates for the generated client module.

use std::path::Path;

use tsbind_core::normalize_newlines;

use crate::{Result, error::read_to_string};

const GENERAL_TEMPLATE: &str = include_str!("../templates/general.ts");
const CONTROLLER_TEMPLATE: &str = include_str!("../templates/controller.ts");
const ENDPOINT_TEMPLATE: &str = include_str!("../templates/endpoint.ts");

/// Raw template texts used by the emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    /// Prelude inserted after the header, if any.
    pub general: Option<String>,
    /// Per-controller wrapper around the endpoint functions.
    pub controller: String,
    /// Per-endpoint function body.
    pub endpoint: String,
}

impl Templates {
    pub fn new(controller: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            general: None,
            controller: controller.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Set the general prelude.
    pub fn with_general(mut self, general: impl Into<String>) -> Self {
        self.general = Some(general.into());
        self
    }

    /// The templates shipped with tsbind.
    pub fn builtin() -> Self {
        Self::new(CONTROLLER_TEMPLATE, ENDPOINT_TEMPLATE).with_general(GENERAL_TEMPLATE)
    }

    /// Load templates from disk.
    pub fn load(general: Option<&Path>, controller: &Path, endpoint: &Path) -> Result<Self> {
        let general = general.map(read_template).transpose()?;
        Ok(Self {
            general,
            controller: read_template(controller)?,
            endpoint: read_template(endpoint)?,
        })
    }
}

fn read_template(path: &Path) -> Result<String> {
    read_to_string(path).map(|s| normalize_newlines(&s))
}
