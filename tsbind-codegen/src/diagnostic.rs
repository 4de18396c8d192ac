//! Notes collected while indexing the model and building clients.
//!
//! Library code never prints; the binary decides which diagnostics to show.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        })
    }
}

/// A message from one generation phase (`"index"` or `"emit"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub phase: String,
    pub message: String,
    /// Where in the model, e.g. `OrdersController.GetById` or a module path.
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn error(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, phase.into(), message.into())
    }

    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Warning, phase.into(), message.into())
    }

    pub fn info(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Info, phase.into(), message.into())
    }

    fn with_severity(severity: Severity, phase: String, message: String) -> Self {
        Self {
            severity,
            phase,
            message,
            location: None,
        }
    }

    pub fn at(self, location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            ..self
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.phase, self.message)?;
        match &self.location {
            Some(location) => write!(f, " (at {location})"),
            None => Ok(()),
        }
    }
}
