//! Core operations.
//!
//! This module contains the business logic for tsbind commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod init;

pub use check::check;
pub use generate::generate;
pub use init::init;

use tsbind_codegen::{Diagnostic, Severity};

/// Diagnostic messages split by severity, locations appended.
#[derive(Debug, Default)]
pub(crate) struct Messages {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

impl<'d> FromIterator<&'d Diagnostic> for Messages {
    fn from_iter<I: IntoIterator<Item = &'d Diagnostic>>(iter: I) -> Self {
        let mut messages = Self::default();
        for diag in iter {
            let msg = if let Some(loc) = &diag.location {
                format!("{}\n  --> {}", diag.message, loc)
            } else {
                diag.message.clone()
            };

            match diag.severity {
                Severity::Error => messages.errors.push(msg),
                Severity::Warning => messages.warnings.push(msg),
                Severity::Info => messages.infos.push(msg),
            }
        }
        messages
    }
}
