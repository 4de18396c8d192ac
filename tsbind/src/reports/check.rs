//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from model resolution.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Classes defined in the model, after deduplication.
    pub model_classes: usize,
    /// Enums defined in the model, after deduplication.
    pub model_enums: usize,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
    /// Types that would be emitted, in emission order.
    pub types: Vec<ResolvedType>,
    /// Referenced names that are neither a class nor an enum.
    pub filtered: Vec<String>,
    /// Clients that would be emitted.
    pub clients: Vec<ClientSummary>,
}

/// A class or enum selected for emission.
#[derive(Debug)]
pub struct ResolvedType {
    pub name: String,
    /// `"class"` or `"enum"`.
    pub kind: &'static str,
}

/// A controller that yields a client block.
#[derive(Debug)]
pub struct ClientSummary {
    /// Namespace name in the generated module.
    pub name: String,
    /// Resolved controller route.
    pub route: String,
    /// Number of endpoint functions.
    pub endpoints: usize,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.info(info);
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() || !self.infos.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.key_value(
            "Model",
            &format!(
                "{} class{}, {} enum{}",
                self.model_classes,
                if self.model_classes == 1 { "" } else { "es" },
                self.model_enums,
                if self.model_enums == 1 { "" } else { "s" }
            ),
        );
        out.newline();

        out.section(&format!("Types ({})", self.types.len()));
        for ty in &self.types {
            out.list_item(&format!("{} {}", ty.kind, ty.name));
        }

        if !self.filtered.is_empty() {
            out.newline();
            out.section(&format!("Filtered ({})", self.filtered.len()));
            for name in &self.filtered {
                out.list_item(name);
            }
        }

        out.newline();
        out.section(&format!("Clients ({})", self.clients.len()));
        for client in &self.clients {
            out.list_item(&format!(
                "{} -> {} ({} endpoint{})",
                client.name,
                client.route,
                client.endpoints,
                if client.endpoints == 1 { "" } else { "s" }
            ));
        }
    }
}
